//! Domain records for the travel graph

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A point of interest (POI) in the travel graph.
///
/// `id` is the sole key used for graph lookups and never changes after
/// construction. Coordinates and rating are validated by [`PlaceNode::new`]
/// and the builder setters; there is no partial mutation of validated fields,
/// only re-creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceNode {
    /// Unique identifier referencing this node in the graph
    pub id: String,

    /// Human friendly name of the place
    pub name: String,

    /// Geographic latitude in decimal degrees, [-90, 90]
    pub latitude: f64,

    /// Geographic longitude in decimal degrees, [-180, 180]
    pub longitude: f64,

    /// Optional user rating in the range 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Tags classifying the place (e.g. `["restaurant", "museum"]`).
    /// Duplicates are allowed; order is display order only.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Extra string attributes (opening hours, source dataset, ...)
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl PlaceNode {
    /// Create a node with validated coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let node = Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            rating: None,
            categories: Vec::new(),
            metadata: BTreeMap::new(),
        };
        node.validate()?;
        Ok(node)
    }

    /// Range checks shared by construction and deserialization.
    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GraphError::Validation {
                field: "latitude",
                value: self.latitude.to_string(),
                expected: "[-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GraphError::Validation {
                field: "longitude",
                value: self.longitude.to_string(),
                expected: "[-180, 180]",
            });
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(GraphError::Validation {
                    field: "rating",
                    value: rating.to_string(),
                    expected: "[0, 5]",
                });
            }
        }
        Ok(())
    }

    /// Set the rating, validating the 0-5 range.
    pub fn with_rating(mut self, rating: f64) -> Result<Self> {
        self.rating = Some(rating);
        self.validate()?;
        Ok(self)
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Geographic coordinates as a `(lat, lon)` pair.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Serialize to a JSON object for storage or transport.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON, re-running the range checks: out-of-range
    /// values on the wire are rejected the same way they are at
    /// construction.
    pub fn from_json(json: &str) -> Result<Self> {
        let node: Self = serde_json::from_str(json)?;
        node.validate()?;
        Ok(node)
    }
}

/// A directed, weighted relationship between two [`PlaceNode`]s.
///
/// Edges have no identifier of their own: the same `(source_id, target_id)`
/// pair may appear multiple times with different attributes, and the store
/// does not dedupe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEdge {
    /// Identifier of the origin node
    pub source_id: String,

    /// Identifier of the destination node
    pub target_id: String,

    /// Distance between the nodes in meters, non-negative
    pub distance: f64,

    /// Relative strength of the connection, strictly positive (default 1.0)
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Optional description of the relationship (e.g. `"nearby"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,

    /// Extra string attributes
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

fn default_weight() -> f64 {
    1.0
}

impl PlaceEdge {
    /// Create an edge with validated distance and the default weight of 1.0.
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>, distance: f64) -> Result<Self> {
        let edge = Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            distance,
            weight: 1.0,
            relationship_type: None,
            metadata: BTreeMap::new(),
        };
        edge.validate()?;
        Ok(edge)
    }

    /// Range checks shared by construction and deserialization.
    fn validate(&self) -> Result<()> {
        if self.distance < 0.0 {
            return Err(GraphError::Validation {
                field: "distance",
                value: self.distance.to_string(),
                expected: ">= 0",
            });
        }
        if self.weight <= 0.0 {
            return Err(GraphError::Validation {
                field: "weight",
                value: self.weight.to_string(),
                expected: "> 0",
            });
        }
        Ok(())
    }

    /// Set the weight, validating that it is strictly positive.
    pub fn with_weight(mut self, weight: f64) -> Result<Self> {
        self.weight = weight;
        self.validate()?;
        Ok(self)
    }

    pub fn with_relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
        self.relationship_type = Some(relationship_type.into());
        self
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether the edge connects a node to itself.
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }

    /// A new edge with source and target swapped, attributes kept.
    pub fn reversed(&self) -> Self {
        Self {
            source_id: self.target_id.clone(),
            target_id: self.source_id.clone(),
            distance: self.distance,
            weight: self.weight,
            relationship_type: self.relationship_type.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON, re-running the range checks.
    pub fn from_json(json: &str) -> Result<Self> {
        let edge: Self = serde_json::from_str(json)?;
        edge.validate()?;
        Ok(edge)
    }
}
