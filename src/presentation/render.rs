use serde::Serialize;

use crate::domain::address::PostalAddress;
use crate::domain::bank::Bank;

const RULE_WIDTH: usize = 62;

pub fn raw_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn bank_detail(bank: &Bank) -> String {
    format!(
        "Code:      {:03}\nISPB:      {}\nName:      {}\nFull Name: {}\n",
        bank.code, bank.ispb, bank.name, bank.full_name
    )
}

pub fn bank_table(banks: &[Bank]) -> String {
    let mut out = format!("{:<6} {:<11} {}\n", "CODE", "ISPB", "FULL NAME");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for bank in banks {
        let code = format!("{:03}", bank.code);
        out.push_str(&format!("{code:<6} {:<11} {}\n", bank.ispb, bank.full_name));
    }

    out.push_str(&format!("\nTotal: {} banks\n", banks.len()));
    out
}

pub fn address_detail(address: &PostalAddress) -> String {
    [
        ("CEP:", &address.code),
        ("State:", &address.state),
        ("City:", &address.city),
        ("Neighborhood:", &address.neighborhood),
        ("Street:", &address.street),
        ("Service:", &address.source_service),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<14}{value}\n"))
    .collect()
}
