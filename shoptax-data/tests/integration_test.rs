//! Integration tests for settings loading, exemption merging, and the
//! file-backed settings source.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shoptax_core::format::tax_summary_text;
use shoptax_core::{
    SalesTaxCalculator, SettingsSourceError, TaxCalculationInput, TaxSettings, TaxSettingsSource,
};
use shoptax_data::{ExemptCustomerImport, FileSettingsSource, SettingsLoader};
use tempfile::TempDir;

const SHOP_42_SETTINGS: &str = include_str!("../test-data/shop_42_settings.json");
const EXEMPT_CUSTOMERS_CSV: &str = include_str!("../test-data/exempt_customers.csv");

/// Writes a tenant settings document into a directory served by
/// `FileSettingsSource`.
fn write_tenant(dir: &TempDir, tenant_id: &str, payload: &str) {
    let path = dir.path().join(format!("{tenant_id}.json"));
    std::fs::write(path, payload).expect("Failed to write tenant settings");
}

fn quote(labor: Decimal, parts: Decimal) -> TaxCalculationInput {
    TaxCalculationInput {
        labor_amount: labor,
        parts_amount: parts,
        customer_tax_exempt: None,
        customer_exemption_id: None,
    }
}

#[test]
fn test_loader_reads_hosted_payload_shape() {
    let settings =
        SettingsLoader::parse(SHOP_42_SETTINGS.as_bytes()).expect("Failed to parse settings");

    assert_eq!(settings.labor_tax_rate, dec!(8.25));
    assert_eq!(settings.parts_tax_rate, dec!(8.25));
    assert_eq!(settings.tax_description, "Sales Tax");
    assert_eq!(settings.tax_exempt_customers, vec!["fleet-city-001"]);
    assert!(settings.updated_at.is_some());
}

#[tokio::test]
async fn test_file_source_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_tenant(&dir, "shop-42", SHOP_42_SETTINGS);

    let source = FileSettingsSource::new(dir.path());
    let settings = source
        .tax_settings("shop-42")
        .await
        .expect("Failed to load tenant settings");

    assert_eq!(settings.labor_tax_rate, dec!(8.25));
    assert!(settings.is_customer_exempt("fleet-city-001"));
}

#[tokio::test]
async fn test_file_source_missing_tenant() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_tenant(&dir, "shop-42", SHOP_42_SETTINGS);

    let source = FileSettingsSource::new(dir.path());
    let err = source
        .tax_settings("shop-99")
        .await
        .expect_err("Should fail for unknown tenant");

    let SettingsSourceError::TenantNotFound(tenant_id) = err else {
        panic!("Expected TenantNotFound error, got: {err:?}");
    };
    assert_eq!(tenant_id, "shop-99");
}

#[tokio::test]
async fn test_file_source_malformed_document() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_tenant(&dir, "shop-42", "{not json");

    let source = FileSettingsSource::new(dir.path());
    let err = source
        .tax_settings("shop-42")
        .await
        .expect_err("Should fail for malformed JSON");

    assert!(
        matches!(err, SettingsSourceError::Decode(_)),
        "Expected Decode error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_file_source_exemption_check() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_tenant(&dir, "shop-42", SHOP_42_SETTINGS);

    let source = FileSettingsSource::new(dir.path());

    let exempt = source
        .customer_tax_exempt("shop-42", "fleet-city-001")
        .await
        .expect("Failed to check exemption");
    let not_exempt = source
        .customer_tax_exempt("shop-42", "walk-in")
        .await
        .expect("Failed to check exemption");

    assert!(exempt);
    assert!(!not_exempt);
}

#[test]
fn test_merge_then_price_quote() {
    let mut settings =
        SettingsLoader::parse(SHOP_42_SETTINGS.as_bytes()).expect("Failed to parse settings");
    let records =
        ExemptCustomerImport::parse(EXEMPT_CUSTOMERS_CSV.as_bytes()).expect("Failed to parse CSV");

    // fleet-city-001 is already on the settings, so only two new ids land
    let appended = ExemptCustomerImport::merge_into(&mut settings, &records);
    assert_eq!(appended, 2);
    assert_eq!(
        settings.tax_exempt_customers,
        vec!["fleet-city-001", "nonprofit-114", "school-dist-77"]
    );

    let calculator = SalesTaxCalculator::new(&settings);
    let result = calculator.calculate(&quote(dec!(400.00), dec!(250.00)));

    assert_eq!(result.labor_tax, dec!(33.00));
    assert_eq!(result.parts_tax, dec!(20.63));
    assert_eq!(result.total_tax, dec!(53.63));
    assert_eq!(result.labor_total, dec!(433.00));
    assert_eq!(result.parts_total, dec!(270.63));
    assert_eq!(result.grand_total, dec!(703.63));
    assert_eq!(tax_summary_text(&result), "Sales Tax (8.25%): $53.63");
}

#[test]
fn test_merged_customer_prices_tax_free() {
    let mut settings =
        SettingsLoader::parse(SHOP_42_SETTINGS.as_bytes()).expect("Failed to parse settings");
    let records =
        ExemptCustomerImport::parse(EXEMPT_CUSTOMERS_CSV.as_bytes()).expect("Failed to parse CSV");
    ExemptCustomerImport::merge_into(&mut settings, &records);

    let calculator = SalesTaxCalculator::new(&settings);
    let input = TaxCalculationInput {
        labor_amount: dec!(400.00),
        parts_amount: dec!(250.00),
        customer_tax_exempt: None,
        customer_exemption_id: Some("nonprofit-114".to_string()),
    };
    let result = calculator.calculate(&input);

    assert_eq!(result.total_tax, dec!(0.00));
    assert_eq!(result.grand_total, dec!(650.00));
    assert_eq!(tax_summary_text(&result), "Sales Tax (Exempt): $0.00");
}

#[test]
fn test_merge_is_idempotent_across_runs() {
    let mut settings = TaxSettings::default();
    let records =
        ExemptCustomerImport::parse(EXEMPT_CUSTOMERS_CSV.as_bytes()).expect("Failed to parse CSV");

    let first = ExemptCustomerImport::merge_into(&mut settings, &records);
    let second = ExemptCustomerImport::merge_into(&mut settings, &records);

    assert_eq!(first, 3);
    assert_eq!(second, 0);
    assert_eq!(settings.tax_exempt_customers.len(), 3);
}
