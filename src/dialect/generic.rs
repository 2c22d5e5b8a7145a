use crate::dialect::Dialect;

/// The ANSI fallback used when the product is unknown or needs nothing
/// special. Every behavior is the trait default.
#[derive(Debug, Clone, Copy)]
pub struct Generic;

impl Dialect for Generic {
    fn name(&self) -> &'static str {
        "generic"
    }
}
