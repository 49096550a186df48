//! Redirect intents.

/// Query parameter carrying the checkout step.
pub const STEP_PARAM: &str = "step";

/// What a locale-scoped redirect must carry besides the destination path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RedirectIntent {
    /// Destination path only.
    #[default]
    PlainPath,
    /// Checkout redirect that opens at the given step (e.g. `addresses`).
    CheckoutStep(String),
    /// The original path matched no route; the destination renders not-found.
    NotFoundFallback,
}

impl RedirectIntent {
    /// Create a checkout intent.
    pub fn checkout_step(step: impl Into<String>) -> Self {
        Self::CheckoutStep(step.into())
    }

    /// Search parameters forwarded unchanged to the destination.
    pub fn search_params(&self) -> Vec<(String, String)> {
        match self {
            Self::CheckoutStep(step) => vec![(STEP_PARAM.to_string(), step.clone())],
            Self::PlainPath | Self::NotFoundFallback => Vec::new(),
        }
    }

    /// Whether the redirect is a 404 probe.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundFallback)
    }
}
