//! Basic usage example for the WanderTopo travel graph engine
//!
//! Run: cargo run --example basic_usage

use wandertopo::{GraphEngine, PlaceEdge, PlaceNode, SimpleRecommender};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== WanderTopo - Basic Usage ===\n");

    let mut graph = GraphEngine::new();

    println!("1. Building the graph...");

    graph.add_node(
        PlaceNode::new("louvre", "Louvre", 48.8606, 2.3376)?
            .with_rating(4.7)?
            .with_categories(["museum", "landmark"]),
    )?;
    graph.add_node(
        PlaceNode::new("orsay", "Musée d'Orsay", 48.8600, 2.3266)?
            .with_rating(4.6)?
            .with_categories(["museum"]),
    )?;
    graph.add_node(
        PlaceNode::new("tour-eiffel", "Tour Eiffel", 48.8584, 2.2945)?
            .with_rating(4.8)?
            .with_categories(["landmark"]),
    )?;
    graph.add_node(
        PlaceNode::new("cafe-marly", "Café Marly", 48.8629, 2.3353)?
            .with_rating(4.1)?
            .with_categories(["restaurant", "cafe"]),
    )?;

    graph.add_edge(PlaceEdge::new("louvre", "orsay", 850.0)?.with_relationship_type("walkable"))?;
    graph.add_edge(PlaceEdge::new("orsay", "tour-eiffel", 2600.0)?.with_relationship_type("walkable"))?;
    graph.add_edge(
        PlaceEdge::new("louvre", "cafe-marly", 120.0)?
            .with_weight(2.0)?
            .with_relationship_type("nearby"),
    )?;
    graph.add_edge(PlaceEdge::new("louvre", "tour-eiffel", 3900.0)?)?;

    println!("   {} nodes, {} edges\n", graph.node_count(), graph.edge_count());

    println!("2. Neighbors of the Louvre:");
    for place in graph.neighbors("louvre") {
        println!("   - {} ({:?})", place.name, place.coordinates());
    }

    println!("\n3. Shortest path Louvre -> Tour Eiffel:");
    if let Some((distance, path)) = graph.shortest_path("louvre", "tour-eiffel") {
        println!("   {:.0} m via {}", distance, path.join(" -> "));
    }

    println!("\n4. Recommendations from the Louvre:");
    let recommender = SimpleRecommender::from_store(&graph);
    for rec in recommender.recommend("louvre", 3, &[]) {
        println!("   {:.2}  {}", rec.score, rec.node.name);
    }

    println!("\n5. Museums only:");
    for rec in recommender.recommend("louvre", 3, &["museum"]) {
        println!("   {:.2}  {}", rec.score, rec.node.name);
    }

    println!("\n6. Serialized node:");
    let louvre = graph.get_node("louvre").expect("node was just added");
    println!("   {}", louvre.to_json()?);

    Ok(())
}
