use serde::{Deserialize, Serialize};

/// Synthetic person record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: chrono::NaiveDate,
}

/// Synthetic retail product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Decimal string with two fraction digits, e.g. "54.20"
    pub price: String,
    pub department: String,
    pub material: String,
    pub color: String,
}

/// Synthetic company record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub industry: String,
    pub buzzword: String,
    /// URL of a placeholder logo image
    pub logo: String,
}

/// Synthetic postal address record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// Synthetic bank account record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    /// IBAN with valid mod-97 check digits
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "accountName")]
    pub account_name: String,
    pub currency: String,
    #[serde(rename = "creditCard")]
    pub credit_card: String,
    pub bic: String,
}
