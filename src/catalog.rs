//! Sample catalog types wired to the validation registry
//!
//! `Course` is the record the form feeds into the registry. `Product`
//! shows the adjacent guard style: its price setter rejects bad input at
//! assignment time, independent of any registry rules.

use crate::validation::{Candidate, Rule, ValidationRegistry};

/// A course entered through the form: a title and a price.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub title: String,
    pub price: f64,
}

impl Course {
    /// Registry key for courses
    pub const TYPE_ID: &'static str = "Course";

    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }

    /// Declare the course rules into a registry.
    ///
    /// Called once at startup; the explicit counterpart of annotating the
    /// fields at the definition site.
    pub fn register_rules(registry: &mut ValidationRegistry) {
        registry.declare(Self::TYPE_ID, "title", Rule::Required);
        registry.declare(Self::TYPE_ID, "price", Rule::Positive);
    }

    /// Snapshot this course as a candidate for validation
    pub fn to_candidate(&self) -> Candidate {
        Candidate::new(Self::TYPE_ID)
            .field("title", self.title.clone())
            .field("price", self.price)
    }
}

/// Error raised by [`Product::set_price`]
#[derive(Debug, Clone, PartialEq)]
pub enum PriceError {
    /// The given price was zero, negative, or not a number
    NotPositive(f64),
}

impl std::fmt::Display for PriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceError::NotPositive(v) => write!(f, "Invalid price: {}", v),
        }
    }
}

impl std::error::Error for PriceError {}

/// A product whose price is guarded at assignment time.
///
/// Unlike `Course`, which is validated after construction, a product
/// never holds a non-positive price: the setter refuses the assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: String,
    price: f64,
}

impl Product {
    /// Create a product.
    ///
    /// # Returns
    /// * `Ok(Product)` - The price was strictly positive
    /// * `Err(PriceError)` - The price was rejected
    pub fn new(title: impl Into<String>, price: f64) -> Result<Self, PriceError> {
        let mut product = Self {
            title: title.into(),
            price: f64::NAN,
        };
        product.set_price(price)?;
        Ok(product)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Set the price, rejecting non-positive values.
    ///
    /// On rejection the stored price is left unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), PriceError> {
        if price > 0.0 {
            self.price = price;
            Ok(())
        } else {
            Err(PriceError::NotPositive(price))
        }
    }

    /// Price with a tax rate applied (e.g. 0.19 for 19%)
    pub fn price_with_tax(&self, rate: f64) -> f64 {
        self.price * (1.0 + rate)
    }
}
