use crate::config::ListFormat;
use crate::core::data::Product;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_hours, pad_right, truncate_string};
use colored::*;

/// Product field types for unified display
enum ProductField {
    Id,
    Name,
    ProcessingTime,
    TimeCalculation,
}

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn hours(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn formula(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>18}: {}", Self::label(label), color_fn(value));
    }

    fn print_product_field(field: ProductField, product: &Product) {
        match field {
            ProductField::Id => {
                Self::print_field_colored("ID", &product.id.to_string(), Self::muted)
            }
            ProductField::Name => Self::print_field_colored("Name", &product.name, Self::name),
            ProductField::ProcessingTime => Self::print_field_colored(
                "Processing time",
                &format!("{} h", format_hours(product.processing_time)),
                Self::hours,
            ),
            ProductField::TimeCalculation => Self::print_field_colored(
                "Time calculation",
                &product.time_calculation,
                Self::formula,
            ),
        }
    }

    pub fn print_product_detailed(product: &Product) {
        println!("{}", Self::title("📦 Product Details"));

        Self::print_product_field(ProductField::Id, product);
        Self::print_product_field(ProductField::Name, product);
        Self::print_product_field(ProductField::ProcessingTime, product);
        Self::print_product_field(ProductField::TimeCalculation, product);
    }

    pub fn print_product_basic(product: &Product) {
        println!(
            "  #{} {} {}",
            product.id,
            Self::name(&product.name),
            Self::muted(&format!("({} h)", format_hours(product.processing_time)))
        );
    }

    /// Format a product for the simple list view
    pub fn format_product_line(product: &Product) -> String {
        format!(
            "{} {}: {} {}",
            Self::muted(&format!("#{}", product.id)),
            Self::name(&product.name),
            Self::hours(&format!("{} h", format_hours(product.processing_time))),
            Self::muted(&format!("[{}]", product.time_calculation))
        )
    }
}

pub fn print_product_count(count: usize) {
    if count == 0 {
        println!("{}", OutputStyle::muted("No products found."));
    } else {
        println!(
            "📦 {} ({} found)",
            OutputStyle::header("Products"),
            OutputStyle::info(&count.to_string())
        );
    }
}

/// Display formatter for different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Format products list according to the specified format
    pub fn format_list(products: &[Product], format: ListFormat) -> AppResult<()> {
        match format {
            ListFormat::Simple => Self::print_simple_list(products),
            ListFormat::Table => Self::print_table_list(products),
            ListFormat::Json => Self::print_json_list(products)?,
        }

        Ok(())
    }

    fn print_simple_list(products: &[Product]) {
        print_product_count(products.len());
        println!("{}", OutputStyle::separator());

        for product in products {
            println!("{}", OutputStyle::format_product_line(product));
        }
    }

    fn print_table_list(products: &[Product]) {
        print_product_count(products.len());
        for line in Self::table_lines(products) {
            println!("{}", line);
        }
    }

    /// Build the box-drawn table, one string per output line
    pub fn table_lines(products: &[Product]) -> Vec<String> {
        let hours: Vec<String> = products
            .iter()
            .map(|p| format_hours(p.processing_time))
            .collect();

        let id_width = products
            .iter()
            .map(|p| p.id.to_string().len())
            .max()
            .unwrap_or(0)
            .max(2);
        let name_width = products
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(4, 40);
        let hours_width = hours
            .iter()
            .map(|h| h.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        let calc_width = products
            .iter()
            .map(|p| p.time_calculation.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(7, 30);

        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{}─{}─{}─{}─{}─{}─{}─{}",
                left,
                "─".repeat(id_width),
                mid,
                "─".repeat(name_width),
                mid,
                "─".repeat(hours_width),
                mid,
                "─".repeat(calc_width)
            ) + "─"
                + right
        };

        let mut lines = Vec::with_capacity(products.len() + 4);
        lines.push(rule("┌", "┬", "┐"));
        lines.push(format!(
            "│ {} │ {} │ {} │ {} │",
            OutputStyle::header(&pad_right("ID", id_width)),
            OutputStyle::header(&pad_right("Name", name_width)),
            OutputStyle::header(&pad_right("Hours", hours_width)),
            OutputStyle::header(&pad_right("Formula", calc_width)),
        ));
        lines.push(rule("├", "┼", "┤"));

        for (product, hours) in products.iter().zip(&hours) {
            lines.push(format!(
                "│ {} │ {} │ {} │ {} │",
                OutputStyle::muted(&format!("{:>id_width$}", product.id)),
                OutputStyle::name(&pad_right(
                    &truncate_string(&product.name, name_width),
                    name_width
                )),
                OutputStyle::hours(&format!("{:>hours_width$}", hours)),
                OutputStyle::formula(&pad_right(
                    &truncate_string(&product.time_calculation, calc_width),
                    calc_width
                )),
            ));
        }

        lines.push(rule("└", "┴", "┘"));
        lines
    }

    fn print_json_list(products: &[Product]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(products)
            .map_err(|e| AppError::System(format!("Failed to serialize products to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
