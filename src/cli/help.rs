//! Per-action help text.

use super::Action;

/// Print help for `action`, or the general help when none is selected.
pub fn show(action: Option<Action>) {
    println!("{}", text(action));
}

/// Print the usage overview shown when no action is given.
pub fn usage() {
    println!("{}", USAGE);
}

const USAGE: &str = "\
Usage:
  Individual parameter operations:
    salter --action <get|put> --name <param-name> [--value <param-value>] [--type <type>] [--region <region>]

  Bulk operations from an ECS task definition:
    salter -s <filename.json> [-o <output-prefix>] [--region <region>]

  Generate task definition from .env:
    salter --action generate -s <env-file> -o <output.json>

  Get parameters by prefix:
    salter --action get-by-prefix --prefix <prefix> -o <output-base>

  Put from template:
    salter --action put-from-template -s <template.json>";

/// Help text for `action`.
pub fn text(action: Option<Action>) -> &'static str {
    match action {
        Some(Action::Get) => {
            "\
Help for 'get' action:
  Retrieve a single parameter from AWS SSM.
  Usage: salter --action get --name <param-name> [--region <region>]
  With -s <task-definition.json>, resolve every secret in the file instead:
    values are printed, or saved to <prefix>-DDMMYY.env/.json with -o <prefix>.
  Example: salter --action get --name /my/param"
        }
        Some(Action::Put) => {
            "\
Help for 'put' action:
  Store or update a single parameter in AWS SSM.
  Usage: salter --action put --name <param-name> --value <value> [--type <type>] [--region <region>]
  Types: string, stringlist, securestring (default: string)
  Example: salter --action put --name /my/param --value 'hello' --type securestring"
        }
        Some(Action::PutFromTemplate) => {
            "\
Help for 'put-from-template' action:
  Push parameters from a JSON template to AWS SSM.
  Usage: salter --action put-from-template -s <template.json> [--region <region>]
  Template format: ECS task definition with a 'secrets' array.
  Example: salter --action put-from-template -s template/task-definition.json"
        }
        Some(Action::Generate) => {
            "\
Help for 'generate' action:
  Generate an ECS task definition JSON from a .env file.
  Usage: salter --action generate -s <env-file> -o <output.json>
  Automatically detects parameter types (string, securestring).
  Example: salter --action generate -s my.env -o task-def.json"
        }
        Some(Action::GetByPrefix) => {
            "\
Help for 'get-by-prefix' action:
  Retrieve all parameters under a prefix from AWS SSM.
  Usage: salter --action get-by-prefix --prefix <prefix> -o <output-base> [--region <region>]
  Saves to <output-base>.env and <output-base>.json
  Example: salter --action get-by-prefix --prefix /prod/app/ -o app-params"
        }
        None => {
            "\
General help:
  Use --action <action> -h for specific help.
  Actions: get, put, put-from-template, generate, get-by-prefix
  Logging: -v/--verbose, or SALTER_LOG=<filter>
  Example: salter --action get -h"
        }
    }
}
