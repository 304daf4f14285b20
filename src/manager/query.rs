// Query operations - List, Search, Calc

use crate::cli::{CalcArgs, ListArgs, SearchArgs};
use crate::config::Config;
use crate::core::formula;
use crate::manager::{close_operations, open_operations};
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::format::format_hours;
use crate::utils::{DisplayFormatter, OutputStyle};

// List operations
pub fn handle_list_command(config: Config, args: &ListArgs) -> AppResult<()> {
    let operations = open_operations(&config);
    let products = operations.get_all().to_vec();
    close_operations(operations);

    if products.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "products".to_string(),
        });
        return Ok(());
    }

    let format = args.format.unwrap_or(config.general.list_format);
    DisplayFormatter::format_list(&products, format)
}

// Search operations
pub fn handle_search_command(config: Config, args: &SearchArgs) -> AppResult<()> {
    let operations = open_operations(&config);
    let products = operations.search(&args.query);
    close_operations(operations);

    if products.is_empty() {
        handle_flow(FlowResult::NotFound {
            item_type: "Products matching".to_string(),
            search_term: args.query.clone(),
        });
        return Ok(());
    }

    let format = args.format.unwrap_or(config.general.list_format);
    DisplayFormatter::format_list(&products, format)
}

// Formula preview
pub fn handle_calc_command(args: &CalcArgs) {
    let total = formula::evaluate(&args.formula);
    println!(
        "{} = {}",
        OutputStyle::formula(&args.formula),
        OutputStyle::hours(&format!("{} h", format_hours(total)))
    );
}
