use super::ui;
use crate::core::calculator::{self, Evaluation, EvaluationOptions, LoanInput};
use crate::core::format::{format_amount, format_rate, format_rate_fixed};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

impl Evaluation {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut output = format!(
            "{}\n\n",
            ui::style_text("Tính Tiền Lãi Cầm Đồ", ui::StyleType::Title)
        );

        if !self.date_error_message.is_empty() {
            output.push_str(&ui::style_text(
                &self.date_error_message,
                ui::StyleType::Error,
            ));
            return output;
        }

        if self.has_elapsed_time() {
            output.push_str(&format!(
                "Tổng số ngày cầm cố: {} ngày\nTổng số tháng cầm cố: {} tháng\nSố ngày lẻ cầm cố: {} ngày\n",
                self.elapsed.total_days, self.elapsed.whole_months, self.elapsed.leftover_days
            ));
        }

        let Some(result) = &self.result else {
            output.push_str(&ui::style_text(
                "Không có tiền lãi để tính.",
                ui::StyleType::Subtle,
            ));
            return output;
        };

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Loại Tài Sản"),
            ui::header_cell("Lãi Suất Hàng Tháng (%)"),
            ui::header_cell("Lãi Từ Tháng"),
            ui::header_cell("Lãi Từ Ngày Lẻ (%)"),
            ui::header_cell("Lãi Từ Ngày Lẻ"),
            ui::header_cell("Tổng Lãi"),
        ]);
        table.add_row(vec![
            Cell::new(result.asset_category.display_label()),
            ui::number_cell(format_rate(result.monthly_rate_percent)),
            ui::number_cell(format_amount(result.month_interest_amount, currency)),
            ui::number_cell(format_rate_fixed(result.leftover_rate_percent)),
            ui::number_cell(format_amount(result.leftover_interest_amount, currency)),
            ui::total_cell(format_amount(result.total_interest_amount, currency)),
        ]);

        output.push('\n');
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Tổng Tiền Phải Trả", ui::StyleType::TotalLabel),
            ui::style_text(
                &format_amount(result.total_payment, currency),
                ui::StyleType::TotalValue
            )
        ));
        output
    }
}

/// Evaluates one loan and prints it, either as a table or as JSON.
pub fn run(
    input: &LoanInput,
    today: NaiveDate,
    options: &EvaluationOptions,
    currency: &str,
    json: bool,
) -> Result<()> {
    let evaluation = calculator::evaluate_with(input, today, options);
    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation.display_as_table(currency));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::AssetCategory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn evaluate(principal: &str, start: &str) -> Evaluation {
        let input = LoanInput {
            asset_category: AssetCategory::VehicleTitle,
            principal_text: principal.to_string(),
            start_date_text: start.to_string(),
        };
        calculator::evaluate(&input, today())
    }

    #[test]
    fn test_table_shows_amounts() {
        console::set_colors_enabled(false);
        // 65 days inclusive
        let output = evaluate("10000000", "12/04/2024").display_as_table("VND");
        assert!(output.contains("Tổng số ngày cầm cố: 65 ngày"));
        assert!(output.contains("Tổng số tháng cầm cố: 2 tháng"));
        assert!(output.contains("Số ngày lẻ cầm cố: 5 ngày"));
        // Table cells may wrap on narrow terminals, so only match unbreakable tokens.
        assert!(output.contains("Giấy"));
        assert!(output.contains("1,200,000"));
        assert!(output.contains("1.80%"));
        assert!(output.contains("180,000"));
        assert!(output.contains("1,380,000"));
        assert!(output.contains("Tổng Tiền Phải Trả: 11,380,000 VND"));
    }

    #[test]
    fn test_table_shows_error_only() {
        console::set_colors_enabled(false);
        let output = evaluate("10000000", "31/02/2024").display_as_table("VND");
        assert!(output.contains("Ngày không hợp lệ. Vui lòng nhập lại."));
        assert!(!output.contains("Tổng Lãi"));
    }

    #[test]
    fn test_zero_principal_has_no_table() {
        console::set_colors_enabled(false);
        let output = evaluate("", "01/06/2024").display_as_table("VND");
        assert!(output.contains("Tổng số ngày cầm cố: 15 ngày"));
        assert!(!output.contains("Tổng Lãi"));
    }

    #[test]
    fn test_evaluation_serializes_to_json() {
        let value = serde_json::to_value(evaluate("10000000", "12/04/2024")).unwrap();
        assert_eq!(value["date_state"], "Valid");
        assert_eq!(value["elapsed"]["total_days"], 65);
        assert_eq!(value["result"]["total_payment"], 11_380_000);
        assert_eq!(value["result"]["asset_category"], "vehicle-title");
        assert_eq!(value["evaluation_date"], "2024-06-15");
    }
}
