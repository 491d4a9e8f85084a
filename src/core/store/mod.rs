//! Parameter store access.
//!
//! Every remote call goes through the [`ParameterStore`] trait so the
//! bulk operations can run against [`Memory`] in tests and against SSM in
//! the binary.
//!
//! ## Adding a New Backend
//!
//! 1. Implement `get`, `put` and `list_page`
//! 2. Add the implementation in a new file next to `aws.rs`
//! 3. Re-export from this module

use tracing::debug;

use crate::core::domain::Parameter;
use crate::error::Result;

#[cfg(feature = "aws")]
mod aws;
mod memory;

#[cfg(feature = "aws")]
pub use aws::Ssm;
pub use memory::Memory;

/// One page of a by-prefix listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub parameters: Vec<Parameter>,
    /// Continuation token; `None` on the last page.
    pub next_token: Option<String>,
}

/// Remote key-value store for parameters.
pub trait ParameterStore {
    /// Fetch one parameter, decrypted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the parameter is missing or the call fails.
    fn get(&self, name: &str) -> Result<Parameter>;

    /// Create or overwrite a parameter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Put` if the call fails.
    fn put(&self, parameter: &Parameter) -> Result<()>;

    /// Fetch one page of parameters under `prefix`, recursively, decrypted.
    fn list_page(&self, prefix: &str, next_token: Option<&str>) -> Result<Page>;

    /// Every parameter under `prefix`, in page order.
    ///
    /// Pages are fetched one at a time until the store returns no
    /// continuation token.
    fn list_by_prefix(&self, prefix: &str) -> Result<Vec<Parameter>> {
        let mut parameters = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.list_page(prefix, next_token.as_deref())?;
            pages += 1;
            debug!(prefix, page = pages, count = page.parameters.len(), "fetched page");
            parameters.extend(page.parameters);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        Ok(parameters)
    }
}

/// Connect to the parameter store for `region`.
///
/// # Errors
///
/// `StoreError::Runtime` if the client cannot start, or
/// `StoreError::Unsupported` when built without the `aws` feature.
pub fn connect(region: &str) -> Result<Box<dyn ParameterStore>> {
    #[cfg(feature = "aws")]
    {
        Ok(Box::new(Ssm::connect(region)?))
    }

    #[cfg(not(feature = "aws"))]
    {
        let _ = region;
        Err(crate::error::StoreError::Unsupported.into())
    }
}
