use boleto::BoletoRecord;
use serde_json::{Value, json};

pub const BARCODE: &str = "00191962900000150000000001234567800000001718";
pub const DIGITABLE_LINE: &str = "00190.00009 01234.567800 00000.017182 1 96290000015000";

/// A record as it arrives from upstream systems.
pub fn record_json() -> Value {
    json!({
        "payee_name": "Escola Municipal de Música",
        "payee_address": "Rua das Flores, 100 - Centro - São Paulo/SP",
        "payee_tax_id": "12.345.678/0001-90",
        "payee_label": "Agência/Código beneficiário",
        "agency_account": "1234-5 / 67890-1",
        "payer_lines": [
            "João Pereira",
            "Av. Paulista, 1000 - Bela Vista",
            "01310-100 - São Paulo/SP"
        ],
        "bank_code": "001-9",
        "due_date": "2024-03-10",
        "document_date": "2024-03-01",
        "processing_date": "2024-03-01",
        "document_number": "2024/03",
        "document_value": 1234.5,
        "our_number": "12345678",
        "barcode": BARCODE,
        "digitable_line": DIGITABLE_LINE,
        "wallet": "18",
        "species": "R$",
        "document_species": "DM",
        "acceptance": "N",
        "payment_location": "Pagável em qualquer banco até o vencimento",
        "instructions": ["Não receber após o vencimento"],
        "memo": ["Mensalidade de março", "Aulas de piano"]
    })
}

pub fn record() -> BoletoRecord {
    serde_json::from_value(record_json()).expect("fixture record is valid")
}

pub fn record_for(payer: &str, document_number: &str) -> BoletoRecord {
    let mut record = record();
    record.payer_lines[0] = payer.to_string();
    record.document_number = document_number.to_string();
    record
}
