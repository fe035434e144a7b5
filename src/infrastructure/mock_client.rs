use crate::application::ports::{ApiError, BrasilApi};
use crate::domain::address::PostalAddress;
use crate::domain::bank::Bank;

type AddressFn = Box<dyn Fn(&str) -> Result<PostalAddress, ApiError>>;
type BanksFn = Box<dyn Fn() -> Result<Vec<Bank>, ApiError>>;
type BankFn = Box<dyn Fn(&str) -> Result<Bank, ApiError>>;

/// [`BrasilApi`] whose answers come from closures. Unset closures answer with
/// the default value.
#[derive(Default)]
pub struct MockClient {
    pub get_address_fn: Option<AddressFn>,
    pub list_banks_fn: Option<BanksFn>,
    pub get_bank_by_code_fn: Option<BankFn>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get_address(
        mut self,
        f: impl Fn(&str) -> Result<PostalAddress, ApiError> + 'static,
    ) -> Self {
        self.get_address_fn = Some(Box::new(f));
        self
    }

    pub fn on_list_banks(mut self, f: impl Fn() -> Result<Vec<Bank>, ApiError> + 'static) -> Self {
        self.list_banks_fn = Some(Box::new(f));
        self
    }

    pub fn on_get_bank_by_code(
        mut self,
        f: impl Fn(&str) -> Result<Bank, ApiError> + 'static,
    ) -> Self {
        self.get_bank_by_code_fn = Some(Box::new(f));
        self
    }
}

impl BrasilApi for MockClient {
    fn get_address(&self, cep: &str) -> Result<PostalAddress, ApiError> {
        match &self.get_address_fn {
            Some(f) => f(cep),
            None => Ok(PostalAddress::default()),
        }
    }

    fn list_banks(&self) -> Result<Vec<Bank>, ApiError> {
        match &self.list_banks_fn {
            Some(f) => f(),
            None => Ok(Vec::new()),
        }
    }

    fn get_bank_by_code(&self, code: &str) -> Result<Bank, ApiError> {
        match &self.get_bank_by_code_fn {
            Some(f) => f(code),
            None => Ok(Bank::default()),
        }
    }
}
