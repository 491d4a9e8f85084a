//! AWS Systems Manager Parameter Store backend.
//!
//! Enabled by the default `aws` feature. Credentials come from the default
//! provider chain (environment, profile, instance role); the region is
//! always explicit.
//!
//! The SDK is async; calls are driven one at a time on a current-thread
//! runtime owned by the client. There are no timeouts or retries beyond
//! what the SDK itself applies.

use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use tracing::trace;

use super::{Page, ParameterStore};
use crate::core::constants;
use crate::core::domain::{Parameter, ParameterType};
use crate::error::{Result, StoreError};

/// SSM-backed parameter store
pub struct Ssm {
    client: aws_sdk_ssm::Client,
    runtime: tokio::runtime::Runtime,
}

impl Ssm {
    /// Build a client for `region`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start.
    pub fn connect(region: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        let config = runtime.block_on(
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );
        trace!(region, "ssm client configured");

        Ok(Self {
            client: aws_sdk_ssm::Client::new(&config),
            runtime,
        })
    }
}

fn from_sdk(p: &aws_sdk_ssm::types::Parameter) -> Parameter {
    let kind = p
        .r#type()
        .map(|t| ParameterType::from_tag(t.as_str()))
        .unwrap_or_default();
    Parameter::new(
        p.name().unwrap_or_default(),
        p.value().unwrap_or_default(),
        kind,
    )
}

impl ParameterStore for Ssm {
    fn get(&self, name: &str) -> Result<Parameter> {
        trace!(name, "get parameter");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|se| se.is_parameter_not_found())
                {
                    StoreError::NotFound(name.to_string())
                } else {
                    StoreError::Get {
                        name: name.to_string(),
                        reason: DisplayErrorContext(&e).to_string(),
                    }
                }
            })?;

        let parameter = output
            .parameter()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(from_sdk(parameter))
    }

    fn put(&self, parameter: &Parameter) -> Result<()> {
        trace!(name = %parameter.name, kind = %parameter.kind, "put parameter");

        self.runtime
            .block_on(
                self.client
                    .put_parameter()
                    .name(&parameter.name)
                    .value(&parameter.value)
                    .r#type(aws_sdk_ssm::types::ParameterType::from(
                        parameter.kind.as_str(),
                    ))
                    .overwrite(true)
                    .send(),
            )
            .map_err(|e| StoreError::Put {
                name: parameter.name.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    fn list_page(&self, prefix: &str, next_token: Option<&str>) -> Result<Page> {
        trace!(prefix, has_token = next_token.is_some(), "list parameters by path");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(prefix)
                    .recursive(true)
                    .with_decryption(true)
                    .max_results(constants::LIST_PAGE_SIZE)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::List {
                prefix: prefix.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(Page {
            parameters: output.parameters().iter().map(from_sdk).collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}
