//! Get and put commands - single parameter operations.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::{output, require};
use crate::core::domain::{Parameter, ParameterType};
use crate::core::store::{self, ParameterStore};
use crate::error::{Error, Result};

const NAME_REQUIRED: &str = "-name is required for 'get' and 'put' actions";
const VALUE_REQUIRED: &str = "-value is required for 'put' action";
const INVALID_TYPE: &str = "Invalid type. Use 'string', 'stringlist', or 'securestring'";

/// Print one decrypted parameter.
pub fn get(name: Option<&str>, region: &str) -> Result<()> {
    let name = require(name, NAME_REQUIRED)?;
    let store = store::connect(region)?;
    get_with(store.as_ref(), name)
}

/// Print one decrypted parameter from `store`.
pub fn get_with(store: &dyn ParameterStore, name: &str) -> Result<()> {
    let parameter = store.get(name)?;
    debug!(name, kind = %parameter.kind, "fetched parameter");

    let value = Zeroizing::new(parameter.value);
    println!("Parameter {}: {}", name, value.as_str());
    Ok(())
}

/// Validate the flags for `put` and build the parameter to store.
pub fn prepare_put(name: Option<&str>, value: Option<&str>, kind: &str) -> Result<Parameter> {
    let name = require(name, NAME_REQUIRED)?;
    let value = require(value, VALUE_REQUIRED)?;
    if value.is_empty() {
        return Err(Error::Usage(VALUE_REQUIRED.to_string()));
    }
    let kind = ParameterType::parse(kind).ok_or_else(|| Error::Usage(INVALID_TYPE.to_string()))?;

    Ok(Parameter::new(name, value, kind))
}

/// Create or overwrite one parameter.
pub fn put(name: Option<&str>, value: Option<&str>, kind: &str, region: &str) -> Result<()> {
    let parameter = prepare_put(name, value, kind)?;
    let store = store::connect(region)?;
    put_with(store.as_ref(), &parameter)
}

/// Create or overwrite one parameter in `store`.
pub fn put_with(store: &dyn ParameterStore, parameter: &Parameter) -> Result<()> {
    store.put(parameter)?;
    output::success(&format!(
        "Parameter {} set successfully as {}",
        parameter.name, parameter.kind
    ));
    Ok(())
}
