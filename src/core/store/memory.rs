//! In-process parameter store.
//!
//! Holds parameters in a sorted map and pages listings like the remote
//! service does. Individual names can be marked as failing to exercise
//! per-item error handling.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{Page, ParameterStore};
use crate::core::constants;
use crate::core::domain::Parameter;
use crate::error::{Result, StoreError};

/// In-memory store
#[derive(Debug)]
pub struct Memory {
    parameters: RefCell<BTreeMap<String, Parameter>>,
    failing: BTreeSet<String>,
    page_size: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            parameters: RefCell::new(BTreeMap::new()),
            failing: BTreeSet::new(),
            page_size: constants::LIST_PAGE_SIZE as usize,
        }
    }

    /// Store seeded with `parameters`
    pub fn with_parameters(parameters: impl IntoIterator<Item = Parameter>) -> Self {
        let store = Self::new();
        for p in parameters {
            store.parameters.borrow_mut().insert(p.name.clone(), p);
        }
        store
    }

    /// Set the listing page size (at least 1)
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Make every `get` and `put` of `name` fail
    pub fn failing(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    /// Number of stored parameters
    pub fn len(&self) -> usize {
        self.parameters.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.borrow().is_empty()
    }
}

impl ParameterStore for Memory {
    fn get(&self, name: &str) -> Result<Parameter> {
        if self.failing.contains(name) {
            return Err(StoreError::Get {
                name: name.to_string(),
                reason: "simulated failure".to_string(),
            }
            .into());
        }
        self.parameters
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn put(&self, parameter: &Parameter) -> Result<()> {
        if self.failing.contains(&parameter.name) {
            return Err(StoreError::Put {
                name: parameter.name.clone(),
                reason: "simulated failure".to_string(),
            }
            .into());
        }
        self.parameters
            .borrow_mut()
            .insert(parameter.name.clone(), parameter.clone());
        Ok(())
    }

    fn list_page(&self, prefix: &str, next_token: Option<&str>) -> Result<Page> {
        let start = match next_token {
            Some(token) => token.parse::<usize>().map_err(|_| StoreError::List {
                prefix: prefix.to_string(),
                reason: format!("invalid next token: {}", token),
            })?,
            None => 0,
        };

        let parameters = self.parameters.borrow();
        let matching: Vec<&Parameter> = parameters
            .values()
            .filter(|p| p.name.starts_with(prefix))
            .collect();

        let end = (start + self.page_size).min(matching.len());
        let page: Vec<Parameter> = matching
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|p| (*p).clone())
            .collect();
        let next_token = (end < matching.len()).then(|| end.to_string());

        Ok(Page {
            parameters: page,
            next_token,
        })
    }
}
