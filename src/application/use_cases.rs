use tracing::debug;

use crate::domain::address::{Cep, PostalAddress};
use crate::domain::bank::{sort_by_code, Bank, BankCode};

use super::ports::{ApiError, BrasilApi};

pub fn list_banks(api: &dyn BrasilApi) -> Result<Vec<Bank>, ApiError> {
    let mut banks = api.list_banks()?;
    debug!(count = banks.len(), "fetched bank list");

    sort_by_code(&mut banks);
    Ok(banks)
}

pub fn get_bank(api: &dyn BrasilApi, code: &BankCode) -> Result<Bank, ApiError> {
    debug!(%code, "looking up bank");
    api.get_bank_by_code(code.as_str())
}

pub fn get_address(api: &dyn BrasilApi, cep: &Cep) -> Result<PostalAddress, ApiError> {
    debug!(%cep, "looking up address");
    api.get_address(cep.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ServiceError;
    use std::cell::RefCell;

    struct StubApi {
        banks: Vec<Bank>,
        requested: RefCell<Vec<String>>,
    }

    impl StubApi {
        fn with_banks(banks: Vec<Bank>) -> Self {
            Self {
                banks,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl BrasilApi for StubApi {
        fn get_address(&self, cep: &str) -> Result<PostalAddress, ApiError> {
            self.requested.borrow_mut().push(cep.to_string());
            Ok(PostalAddress {
                code: cep.to_string(),
                ..Default::default()
            })
        }

        fn list_banks(&self) -> Result<Vec<Bank>, ApiError> {
            Ok(self.banks.clone())
        }

        fn get_bank_by_code(&self, code: &str) -> Result<Bank, ApiError> {
            self.requested.borrow_mut().push(code.to_string());
            self.banks
                .iter()
                .find(|b| b.code.to_string() == code.trim_start_matches('0'))
                .cloned()
                .ok_or_else(|| {
                    ApiError::Service(ServiceError {
                        message: "Código bancário não encontrado".to_string(),
                        kind: "BANK_CODE_NOT_FOUND".to_string(),
                        ..Default::default()
                    })
                })
        }
    }

    struct FailingApi;

    impl BrasilApi for FailingApi {
        fn get_address(&self, _cep: &str) -> Result<PostalAddress, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }

        fn list_banks(&self) -> Result<Vec<Bank>, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }

        fn get_bank_by_code(&self, _code: &str) -> Result<Bank, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    fn make_bank(code: u32, full_name: &str) -> Bank {
        Bank {
            ispb: format!("{code:08}"),
            name: full_name.to_string(),
            full_name: full_name.to_string(),
            code,
        }
    }

    #[test]
    fn list_banks_returns_banks_sorted_by_code() {
        let api = StubApi::with_banks(vec![
            make_bank(341, "ITAÚ UNIBANCO S.A."),
            make_bank(1, "Banco do Brasil S.A."),
            make_bank(70, "BRB - BANCO DE BRASILIA S.A."),
        ]);

        let banks = list_banks(&api).unwrap();

        let codes: Vec<u32> = banks.iter().map(|b| b.code).collect();
        assert_eq!(codes, vec![1, 70, 341]);
    }

    #[test]
    fn list_banks_accepts_empty_listing() {
        let api = StubApi::with_banks(vec![]);

        let banks = list_banks(&api).unwrap();

        assert!(banks.is_empty());
    }

    #[test]
    fn list_banks_propagates_transport_error() {
        let result = list_banks(&FailingApi);

        assert!(matches!(result, Err(ApiError::Transport(msg)) if msg == "connection refused"));
    }

    #[test]
    fn get_bank_passes_code_through_unchanged() {
        let api = StubApi::with_banks(vec![make_bank(1, "Banco do Brasil S.A.")]);
        let code = BankCode::parse("001").unwrap();

        let bank = get_bank(&api, &code).unwrap();

        assert_eq!(bank.code, 1);
        assert_eq!(api.requested.borrow().as_slice(), ["001"]);
    }

    #[test]
    fn get_bank_surfaces_service_error_for_unknown_code() {
        let api = StubApi::with_banks(vec![make_bank(1, "Banco do Brasil S.A.")]);
        let code = BankCode::parse("999").unwrap();

        let err = get_bank(&api, &code).unwrap_err();

        assert_eq!(err.as_service_error().unwrap().kind, "BANK_CODE_NOT_FOUND");
    }

    #[test]
    fn get_address_uses_normalized_cep() {
        let api = StubApi::with_banks(vec![]);
        let cep = Cep::parse("01001-000").unwrap();

        let address = get_address(&api, &cep).unwrap();

        assert_eq!(address.code, "01001000");
        assert_eq!(api.requested.borrow().as_slice(), ["01001000"]);
    }
}
