use super::ui;
use crate::core::format::{format_number, format_rate, format_rate_fixed};
use crate::core::rates::{
    AssetCategory, LEFTOVER_BANDS, MOTORBIKE_BANDS, VEHICLE_TITLE_RATE, leftover_multiplier,
    resolve_leftover_rate,
};
use anyhow::Result;
use comfy_table::Cell;

/// Renders the monthly rate tiers for every collateral type.
pub fn monthly_rate_table() -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Loại Tài Sản"),
        ui::header_cell("Số Tiền Vay"),
        ui::header_cell("Lãi Suất Hàng Tháng (%)"),
    ]);

    let mut lower = 0u64;
    for band in &MOTORBIKE_BANDS {
        let range = match band.below {
            Some(limit) => format!("{} – {}", format_number(lower), format_number(limit - 1)),
            None => format!("≥ {}", format_number(lower)),
        };
        table.add_row(vec![
            Cell::new(AssetCategory::Motorbike.display_label()),
            ui::number_cell(range),
            ui::number_cell(format_rate(band.rate)),
        ]);
        if let Some(limit) = band.below {
            lower = limit;
        }
    }
    table.add_row(vec![
        Cell::new(AssetCategory::VehicleTitle.display_label()),
        ui::number_cell("mọi mức"),
        ui::number_cell(format_rate(VEHICLE_TITLE_RATE)),
    ]);
    table.to_string()
}

/// Renders leftover-day multipliers alongside the resulting rate for each
/// distinct monthly rate.
pub fn leftover_rate_table() -> String {
    let mut monthly_rates: Vec<_> = MOTORBIKE_BANDS.iter().map(|b| b.rate).collect();
    if !monthly_rates.contains(&VEHICLE_TITLE_RATE) {
        monthly_rates.push(VEHICLE_TITLE_RATE);
    }

    let mut header = vec![ui::header_cell("Ngày Lẻ"), ui::header_cell("Hệ Số")];
    header.extend(
        monthly_rates
            .iter()
            .map(|r| ui::header_cell(&format!("Lãi {}", format_rate(*r)))),
    );

    let mut table = ui::new_styled_table();
    table.set_header(header);
    for band in &LEFTOVER_BANDS {
        let multiplier = leftover_multiplier(band.from);
        let mut row = vec![
            Cell::new(format!("{} – {}", band.from, band.to)),
            ui::number_cell(multiplier.normalize().to_string()),
        ];
        row.extend(
            monthly_rates
                .iter()
                .map(|r| ui::number_cell(format_rate_fixed(resolve_leftover_rate(*r, band.from)))),
        );
        table.add_row(row);
    }
    table.to_string()
}

pub fn run() -> Result<()> {
    println!(
        "{}\n",
        ui::style_text("Lãi Suất Hàng Tháng", ui::StyleType::Title)
    );
    println!("{}", monthly_rate_table());
    println!(
        "\n{}\n",
        ui::style_text("Lãi Từ Ngày Lẻ", ui::StyleType::Title)
    );
    println!("{}", leftover_rate_table());
    Ok(())
}
