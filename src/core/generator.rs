use chrono::{Duration, NaiveDate, Utc};
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, TimeZone, ZipCode,
};
use fake::faker::chrono::en::DateTimeBetween;
use fake::faker::company::en::{Buzzword, CatchPhrase, CompanyName, Industry};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::currency::en::CurrencyName;
use fake::faker::finance::en::Bic;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::CellNumber;
use fake::Fake;
use rand::Rng;
use thiserror::Error;

use crate::config::GeneratorSettings;
use crate::core::{commerce, finance};
use crate::models::{Address, BankAccount, Company, Product, User};

/// Upper bound for generated record ids
const MAX_RECORD_ID: u64 = 999_999_999;

/// Youngest generated person, in years
const MIN_AGE_YEARS: i64 = 18;

/// Oldest generated person, in years
const MAX_AGE_YEARS: i64 = 65;

const DAYS_PER_YEAR: i64 = 365;

/// Number of images in the fake-logos placeholder set
const LOGO_COUNT: u32 = 13;

/// Errors that can occur when constructing the generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Locales the generator can produce data for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
}

impl Locale {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "en" | "en_us" | "en-us" => Some(Self::En),
            _ => None,
        }
    }
}

/// Stateless record factory shared across all request handlers
///
/// Every method builds one transient record from thread-local randomness;
/// nothing is retained between calls, so a single instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct FakeDataGenerator {
    locale: Locale,
}

impl FakeDataGenerator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build a generator from settings, validating the configured locale
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self, GeneratorError> {
        let locale = Locale::parse(&settings.locale)
            .ok_or_else(|| GeneratorError::UnsupportedLocale(settings.locale.clone()))?;

        Ok(Self::new(locale))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// One fully populated synthetic user
    pub fn user(&self) -> User {
        let mut rng = rand::rng();

        User {
            id: rng.random_range(1..=MAX_RECORD_ID),
            username: Username().fake_with_rng(&mut rng),
            full_name: Name().fake_with_rng(&mut rng),
            email: FreeEmail().fake_with_rng(&mut rng),
            phone: CellNumber().fake_with_rng(&mut rng),
            date_of_birth: birthday(&mut rng),
        }
    }

    /// A batch of independently generated users, no uniqueness guarantee
    pub fn users(&self, count: usize) -> Vec<User> {
        (0..count).map(|_| self.user()).collect()
    }

    /// One fully populated synthetic product
    pub fn product(&self) -> Product {
        let mut rng = rand::rng();

        Product {
            id: rng.random_range(1..=MAX_RECORD_ID),
            name: commerce::product_name(&mut rng),
            price: commerce::price(&mut rng),
            department: commerce::department(&mut rng).to_string(),
            material: commerce::material(&mut rng).to_string(),
            color: commerce::color(&mut rng).to_string(),
        }
    }

    /// A batch of independently generated products
    pub fn products(&self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.product()).collect()
    }

    /// One fully populated synthetic company
    pub fn company(&self) -> Company {
        let mut rng = rand::rng();

        Company {
            name: CompanyName().fake_with_rng(&mut rng),
            catch_phrase: CatchPhrase().fake_with_rng(&mut rng),
            industry: Industry().fake_with_rng(&mut rng),
            buzzword: Buzzword().fake_with_rng(&mut rng),
            logo: logo_url(&mut rng),
        }
    }

    /// One fully populated synthetic postal address
    pub fn address(&self) -> Address {
        let mut rng = rand::rng();

        let building: String = BuildingNumber().fake_with_rng(&mut rng);
        let street: String = StreetName().fake_with_rng(&mut rng);

        Address {
            street_address: format!("{} {}", building, street),
            city: CityName().fake_with_rng(&mut rng),
            state: StateName().fake_with_rng(&mut rng),
            country: CountryName().fake_with_rng(&mut rng),
            zip_code: ZipCode().fake_with_rng(&mut rng),
            time_zone: TimeZone().fake_with_rng(&mut rng),
        }
    }

    /// One fully populated synthetic bank account
    pub fn bank_account(&self) -> BankAccount {
        let mut rng = rand::rng();

        BankAccount {
            account_number: finance::iban(&mut rng),
            account_name: Name().fake_with_rng(&mut rng),
            currency: CurrencyName().fake_with_rng(&mut rng),
            credit_card: CreditCardNumber().fake_with_rng(&mut rng),
            bic: Bic().fake_with_rng(&mut rng),
        }
    }
}

/// A plausible adult birthday between MIN_AGE_YEARS and MAX_AGE_YEARS ago
fn birthday<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let now = Utc::now();
    let earliest = now - Duration::days(MAX_AGE_YEARS * DAYS_PER_YEAR);
    let latest = now - Duration::days(MIN_AGE_YEARS * DAYS_PER_YEAR);

    DateTimeBetween(earliest, latest)
        .fake_with_rng::<chrono::DateTime<Utc>, _>(rng)
        .date_naive()
}

/// URL into the fake-logos placeholder image set
fn logo_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "https://pigment.github.io/fake-logos/logos/medium/color/{}.png",
        rng.random_range(1..=LOGO_COUNT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_accepts_default_locale() {
        let generator = FakeDataGenerator::from_settings(&GeneratorSettings::default())
            .expect("default settings are valid");
        assert_eq!(generator.locale(), Locale::En);
    }

    #[test]
    fn test_from_settings_rejects_unknown_locale() {
        let settings = GeneratorSettings {
            locale: "xx".to_string(),
            batch_size: 10,
        };

        let result = FakeDataGenerator::from_settings(&settings);
        assert!(matches!(
            result,
            Err(GeneratorError::UnsupportedLocale(ref locale)) if locale == "xx"
        ));
    }

    #[test]
    fn test_birthday_falls_in_adult_window() {
        let mut rng = rand::rng();
        let today = Utc::now().date_naive();

        for _ in 0..50 {
            let dob = birthday(&mut rng);
            let age_days = (today - dob).num_days();
            assert!(age_days >= MIN_AGE_YEARS * DAYS_PER_YEAR - 1, "Too young: {}", dob);
            assert!(age_days <= MAX_AGE_YEARS * DAYS_PER_YEAR + 1, "Too old: {}", dob);
        }
    }

    #[test]
    fn test_logo_url_points_into_image_set() {
        let mut rng = rand::rng();
        let url = logo_url(&mut rng);
        assert!(url.starts_with("https://pigment.github.io/fake-logos/"));
        assert!(url.ends_with(".png"));
    }
}
