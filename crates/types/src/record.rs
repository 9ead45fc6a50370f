use chrono::NaiveDate;
use serde::Deserialize;

/// Everything printed on one boleto.
///
/// The record is built and validated upstream: check digits, the formatted
/// nosso número and the linha digitável arrive ready to print. Renderers only
/// read it.
#[derive(Debug, Clone, Deserialize)]
pub struct BoletoRecord {
    /// Payee ("beneficiário") name.
    pub payee_name: String,
    #[serde(default)]
    pub payee_address: String,
    /// Payee CPF/CNPJ.
    #[serde(default)]
    pub payee_tax_id: String,
    /// Caption printed next to the payee row of the teller receipt.
    #[serde(default)]
    pub payee_label: String,
    /// Agency / payee code display string.
    #[serde(default)]
    pub agency_account: String,
    /// Payer ("pagador") block; the first line is the payer name.
    #[serde(default)]
    pub payer_lines: Vec<String>,
    /// Bank code with check digit, e.g. `001-9`.
    pub bank_code: String,
    pub due_date: NaiveDate,
    pub document_date: NaiveDate,
    pub processing_date: NaiveDate,
    #[serde(default)]
    pub document_number: String,
    pub document_value: f64,
    /// Formatted nosso número.
    pub our_number: String,
    /// The 44-digit barcode line.
    pub barcode: String,
    /// Formatted linha digitável.
    pub digitable_line: String,
    #[serde(default)]
    pub wallet: String,
    /// Currency species, e.g. `R$`.
    #[serde(default)]
    pub species: String,
    /// Document species, e.g. `DM`.
    #[serde(default)]
    pub document_species: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit_value: Option<f64>,
    /// "(-) Descontos/Abatimentos"
    #[serde(default)]
    pub discount: Option<f64>,
    /// "(-) Outras deduções"
    #[serde(default)]
    pub other_deductions: Option<f64>,
    /// "(+) Mora/Multa"
    #[serde(default)]
    pub penalty: Option<f64>,
    /// "(+) Outros acréscimos"
    #[serde(default)]
    pub other_additions: Option<f64>,
    /// "(=) Valor cobrado"
    #[serde(default)]
    pub charged_value: Option<f64>,
    #[serde(default)]
    pub acceptance: String,
    #[serde(default)]
    pub payment_location: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Demonstrativo lines printed on the payer receipt.
    #[serde(default)]
    pub memo: Vec<String>,
    /// Name of a logo asset. Absent means no logo is drawn.
    #[serde(default)]
    pub logo: Option<String>,
}

impl BoletoRecord {
    pub fn payer_name(&self) -> &str {
        self.payer_lines.first().map(String::as_str).unwrap_or("")
    }
}
