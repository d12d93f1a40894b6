//! Text rendering of the dashboard and form.
//!
//! Produces the strings the screens display. Layout and styling are left to
//! whatever front end consumes these structs.

use chrono::NaiveDate;
use std::fmt;

use crate::form::QuickPick;
use crate::models::{FuelType, LogId, LogRecord};
use crate::store::{ActiveView, ViewState};

pub const EMPTY_HISTORY: &str = "Nenhum registro retornado pela API.";

/// `R$ 0.00` style amount.
pub fn currency(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

/// Calendar date in day/month/year order.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: LogId,
    pub fuel_type: FuelType,
    pub date: String,
    pub liters: String,
    pub total: String,
    pub price_per_liter: String,
}

impl HistoryRow {
    pub fn from_record(record: &LogRecord) -> Self {
        Self {
            id: record.id.clone(),
            fuel_type: record.fuel_type,
            date: display_date(record.date),
            liters: format!("{:.2}L", record.liters),
            total: currency(record.total),
            price_per_liter: format!("{}/L", currency(record.price_per_liter)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub period_label: String,
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<StatCard>,
    pub rows: Vec<HistoryRow>,
    /// Size of the full collection, not just the listed rows.
    pub record_count: usize,
}

impl DashboardView {
    pub fn render(state: &ViewState) -> Self {
        let stats = &state.stats;
        let cards = vec![
            StatCard {
                title: "Gasto Mensal",
                value: currency(stats.total_spent),
                subtext: format!("Mês de {}", stats.period_label),
            },
            StatCard {
                title: "Média Preço/L",
                value: currency(stats.avg_price),
                subtext: format!("Total: {:.1} Litros", stats.total_liters),
            },
            StatCard {
                title: "Previsão Fim do Mês",
                value: currency(stats.projected_total),
                subtext: "Calculado pelo Backend".to_string(),
            },
        ];
        Self {
            period_label: stats.period_label.clone(),
            loading: state.is_loading(),
            error: state.error.clone(),
            cards,
            rows: state.recent_logs().iter().map(HistoryRow::from_record).collect(),
            record_count: state.logs.len(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FuelControl | {}", self.period_label)?;
        if let Some(error) = &self.error {
            writeln!(f, "! {}", error)?;
        }
        if self.loading {
            return writeln!(f, "Carregando...");
        }
        for card in &self.cards {
            writeln!(f, "{}: {} ({})", card.title, card.value, card.subtext)?;
        }
        writeln!(f, "Histórico Recente ({} registros)", self.record_count)?;
        if self.rows.is_empty() {
            return writeln!(f, "  {}", EMPTY_HISTORY);
        }
        for row in &self.rows {
            writeln!(
                f,
                "  [{}] {} {} • {}  {} {}",
                row.id,
                row.fuel_type.label(),
                row.date,
                row.liters,
                row.total,
                row.price_per_liter
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub fuel_type: FuelType,
    pub liters: String,
    pub price_per_liter: String,
    pub date: String,
    pub liters_picks: Vec<QuickPick>,
    pub price_picks: Vec<QuickPick>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

impl FormView {
    pub fn render(state: &ViewState) -> Self {
        let draft = &state.draft;
        Self {
            fuel_type: draft.fuel_type,
            liters: draft.liters.clone(),
            price_per_liter: draft.price_per_liter.clone(),
            date: draft.date.clone(),
            liters_picks: draft.liters_picks(),
            price_picks: draft.price_picks(),
            submit_label: if state.submitting { "Salvando..." } else { "Registrar" },
            submit_enabled: !state.submitting,
        }
    }
}

/// Suggestions on one line, the selected one in brackets.
fn pick_row(items: &[QuickPick]) -> String {
    items
        .iter()
        .map(|p| {
            if p.selected {
                format!("[{}]", p.value)
            } else {
                p.value.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Novo Abastecimento")?;
        writeln!(f, "Combustível: {}", self.fuel_type.label())?;
        writeln!(f, "Litros: {}  {}", self.liters, pick_row(&self.liters_picks))?;
        writeln!(
            f,
            "Preço por Litro: R$ {}  {}",
            self.price_per_liter,
            pick_row(&self.price_picks)
        )?;
        writeln!(f, "Data: {}", self.date)?;
        writeln!(f, "<{}>", self.submit_label)
    }
}

/// Render whichever screen is active.
pub fn render(state: &ViewState) -> String {
    let body = match state.view {
        ActiveView::Dashboard => DashboardView::render(state).to_string(),
        ActiveView::AddForm => FormView::render(state).to_string(),
    };
    match &state.notice {
        Some(notice) => format!("{}\n** {} **\n", body, notice),
        None => body,
    }
}

