mod args;
mod output;

pub(crate) use args::{CliArgs, DropdownArg, OutputFormat, PackToggle, RangeArg, SortArg, parse_cli};
pub(crate) use output::{print_json, print_plain};
