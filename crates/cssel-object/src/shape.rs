//! A minimal rectangle value object.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// An axis-aligned rectangle given by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The schema a decoded rectangle is materialized against.
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new("Rectangle").require("width").require("height")
    }
}
