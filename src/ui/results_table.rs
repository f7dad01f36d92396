//! Seller result table, for the form and for plain-text output

use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::backend::SellerResult;

pub const HEADERS: [&str; 5] = ["Clave", "Nombre", "Localidad", "Tipo Comisión", "Estado"];

/// Relative column widths
const PORTIONS: [u16; 5] = [1, 3, 2, 1, 1];

/// Placeholder for missing optional columns
pub fn cell_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Activo"
    } else {
        "Inactivo"
    }
}

pub fn header_text(total_count: u32) -> String {
    format!("Resultados ({} encontrados)", total_count)
}

fn cells(seller: &SellerResult) -> [&str; 5] {
    [
        seller.employee_code.as_str(),
        seller.name.as_str(),
        cell_or_dash(seller.locality.as_deref()),
        cell_or_dash(seller.commission_type.as_deref()),
        status_label(seller.active),
    ]
}

/// Table widget; callers skip it when there are no rows
pub fn view<'a, Message: 'a>(sellers: &'a [SellerResult], total_count: u32) -> Element<'a, Message> {
    let header = row(HEADERS
        .iter()
        .zip(PORTIONS)
        .map(|(title, portion)| -> Element<'a, Message> {
            text(*title)
                .size(14)
                .color(DarkTheme::PRIMARY)
                .width(Length::FillPortion(portion))
                .into()
        }))
    .spacing(12);

    let rows: Vec<Element<'a, Message>> = sellers
        .iter()
        .map(|seller| {
            let status_color = if seller.active {
                DarkTheme::ACTIVE
            } else {
                DarkTheme::INACTIVE
            };
            let line = row(cells(seller)
                .into_iter()
                .zip(PORTIONS)
                .enumerate()
                .map(|(i, (value, portion))| -> Element<'a, Message> {
                    let color = if i == 4 { status_color } else { DarkTheme::TEXT };
                    text(value.to_string())
                        .size(14)
                        .color(color)
                        .width(Length::FillPortion(portion))
                        .into()
                }))
            .spacing(12);

            container(line)
                .padding(Padding::from([8.0, 4.0]))
                .width(Length::Fill)
                .into()
        })
        .collect();

    container(
        column![
            text(header_text(total_count)).size(18).color(DarkTheme::TEXT),
            Space::with_height(8),
            header,
            scrollable(column(rows).spacing(2)).height(Length::Fill),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Plain-text table with aligned columns
pub fn render_text(sellers: &[SellerResult], total_count: u32) -> String {
    let rows: Vec<[&str; 5]> = sellers.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &rows {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = header_text(total_count);
    out.push('\n');
    out.push_str(&format_line(&HEADERS));
    out.push('\n');
    for line in &rows {
        out.push_str(&format_line(line));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(code: &str, locality: Option<&str>, active: bool) -> SellerResult {
        SellerResult {
            employee_code: code.to_string(),
            name: "CARLOS MAGOS TAPIA".to_string(),
            locality: locality.map(str::to_string),
            commission_type: Some("CA".to_string()),
            active,
        }
    }

    #[test]
    fn test_missing_columns_render_dash() {
        assert_eq!(cell_or_dash(None), "-");
        assert_eq!(cell_or_dash(Some("")), "-");
        assert_eq!(cell_or_dash(Some("MONTERREY")), "MONTERREY");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "Activo");
        assert_eq!(status_label(false), "Inactivo");
    }

    #[test]
    fn test_render_text() {
        let sellers = vec![
            seller("CAMT", Some("CD. VICTORIA"), true),
            seller("XY", None, false),
        ];
        let table = render_text(&sellers, 2);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Resultados (2 encontrados)");
        assert!(lines[1].starts_with("Clave  Nombre"));
        assert!(lines[2].starts_with("CAMT   CARLOS MAGOS TAPIA"));
        assert!(lines[2].ends_with("Activo"));
        assert!(lines[3].contains("  -  "));
        assert!(lines[3].ends_with("Inactivo"));
    }
}
