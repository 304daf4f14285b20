// CRUD operations - Add, Show, Edit, Delete

use crate::cli::{AddArgs, DeleteArgs, EditArgs, ShowArgs};
use crate::config::Config;
use crate::manager::{close_operations, open_operations};
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::format::format_hours;
use crate::utils::{self, OutputStyle};

// Create operations
pub fn handle_add_command(config: Config, args: &AddArgs) -> AppResult<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => utils::prompt_input(&format!("{}: ", OutputStyle::label("Name")))?,
    };
    if name.is_empty() {
        handle_flow(FlowResult::Cancelled("No name given, nothing added".to_string()));
        return Ok(());
    }

    let time_calculation = match &args.time_calculation {
        Some(calc) => calc.clone(),
        None => utils::prompt_input(&format!(
            "{}: ",
            OutputStyle::label("Time calculation (e.g. 1.5+2)")
        ))?,
    };

    let mut operations = open_operations(&config);
    let result = operations.add(&name, &time_calculation);
    close_operations(operations);

    let product = result?;
    handle_flow(FlowResult::Success(format!(
        "Product #{} '{}' saved ({} h)",
        product.id,
        product.name,
        format_hours(product.processing_time)
    )));
    Ok(())
}

// Read operations
pub fn handle_show_command(config: Config, args: &ShowArgs) -> AppResult<()> {
    let operations = open_operations(&config);

    match operations.find(args.id) {
        Some(product) => OutputStyle::print_product_detailed(product),
        None => handle_flow(FlowResult::NotFound {
            item_type: "Product".to_string(),
            search_term: args.id.to_string(),
        }),
    }

    close_operations(operations);
    Ok(())
}

// Update operations
pub fn handle_edit_command(config: Config, args: &EditArgs) -> AppResult<()> {
    let mut operations = open_operations(&config);

    let Some(current) = operations.find(args.id).cloned() else {
        handle_flow(FlowResult::NotFound {
            item_type: "Product".to_string(),
            search_term: args.id.to_string(),
        });
        close_operations(operations);
        return Ok(());
    };

    let name = args.name.clone().unwrap_or_else(|| current.name.clone());
    let time_calculation = args
        .time_calculation
        .clone()
        .unwrap_or_else(|| current.time_calculation.clone());

    let result = operations.update(args.id, &name, &time_calculation);
    let updated = operations.find(args.id).cloned();
    close_operations(operations);
    result?;

    if let Some(product) = updated {
        handle_flow(FlowResult::Success(format!(
            "Product #{} updated ({} h)",
            product.id,
            format_hours(product.processing_time)
        )));
    }
    Ok(())
}

// Delete operations
pub fn handle_delete_command(config: Config, args: &DeleteArgs) -> AppResult<()> {
    let mut operations = open_operations(&config);

    let (found, missing): (Vec<u64>, Vec<u64>) = args
        .ids
        .iter()
        .copied()
        .partition(|id| operations.find(*id).is_some());

    for id in &missing {
        handle_flow(FlowResult::NotFound {
            item_type: "Product".to_string(),
            search_term: id.to_string(),
        });
    }

    if found.is_empty() {
        close_operations(operations);
        return Ok(());
    }

    println!("Products to delete:");
    for id in &found {
        if let Some(product) = operations.find(*id) {
            OutputStyle::print_product_basic(product);
        }
    }

    if !args.force && !utils::prompt_yes_no("\nAre you sure you want to delete these products?")? {
        handle_flow(FlowResult::Cancelled("Products not deleted".to_string()));
        close_operations(operations);
        return Ok(());
    }

    let result = match found.as_slice() {
        [id] => operations.delete(*id),
        ids => operations.delete_multiple(ids),
    };
    close_operations(operations);
    result?;

    handle_flow(FlowResult::Success(format!(
        "{} product(s) deleted",
        found.len()
    )));
    Ok(())
}
