//! Sample collections shipped with the console.

use std::borrow::Cow;

use crate::asset::{Asset, AssetRow};
use crate::bill::{Bill, BillRow};
use crate::customer::{Customer, CustomerRow};
use crate::units::UnitError;

const CUSTOMERS: [CustomerRow<'static>; 4] = [
    CustomerRow {
        id: Cow::Borrowed("CUST001"),
        name: Cow::Borrowed("John Smith"),
        email: Cow::Borrowed("john.smith@email.com"),
        phone: Cow::Borrowed("+1 (555) 123-4567"),
        address: Cow::Borrowed("123 Main St, District 1"),
        connection_type: Cow::Borrowed("Residential"),
        status: Cow::Borrowed("Active"),
        monthly_consumption: Cow::Borrowed("450 kWh"),
        outstanding_bill: Cow::Borrowed("$125.50"),
        join_date: Cow::Borrowed("2023-01-15"),
    },
    CustomerRow {
        id: Cow::Borrowed("CUST002"),
        name: Cow::Borrowed("ABC Manufacturing Co."),
        email: Cow::Borrowed("contact@abcmfg.com"),
        phone: Cow::Borrowed("+1 (555) 987-6543"),
        address: Cow::Borrowed("456 Industrial Ave, District 5"),
        connection_type: Cow::Borrowed("Commercial"),
        status: Cow::Borrowed("Active"),
        monthly_consumption: Cow::Borrowed("12,500 kWh"),
        outstanding_bill: Cow::Borrowed("$2,850.00"),
        join_date: Cow::Borrowed("2022-08-22"),
    },
    CustomerRow {
        id: Cow::Borrowed("CUST003"),
        name: Cow::Borrowed("Sarah Johnson"),
        email: Cow::Borrowed("sarah.j@email.com"),
        phone: Cow::Borrowed("+1 (555) 456-7890"),
        address: Cow::Borrowed("789 Oak Lane, District 3"),
        connection_type: Cow::Borrowed("Residential"),
        status: Cow::Borrowed("Suspended"),
        monthly_consumption: Cow::Borrowed("320 kWh"),
        outstanding_bill: Cow::Borrowed("$875.25"),
        join_date: Cow::Borrowed("2023-03-10"),
    },
    CustomerRow {
        id: Cow::Borrowed("CUST004"),
        name: Cow::Borrowed("Green Energy Hospital"),
        email: Cow::Borrowed("admin@greenhospital.com"),
        phone: Cow::Borrowed("+1 (555) 321-0987"),
        address: Cow::Borrowed("321 Medical Center Dr, District 2"),
        connection_type: Cow::Borrowed("Industrial"),
        status: Cow::Borrowed("Active"),
        monthly_consumption: Cow::Borrowed("25,800 kWh"),
        outstanding_bill: Cow::Borrowed("$0.00"),
        join_date: Cow::Borrowed("2021-11-05"),
    },
];

const BILLS: [BillRow<'static>; 4] = [
    BillRow {
        id: Cow::Borrowed("BILL-2024-001"),
        customer_name: Cow::Borrowed("John Smith"),
        customer_id: Cow::Borrowed("CUST001"),
        amount: Cow::Borrowed("$125.50"),
        due_date: Cow::Borrowed("2024-01-15"),
        status: Cow::Borrowed("Paid"),
        billing_period: Cow::Borrowed("Dec 2023"),
    },
    BillRow {
        id: Cow::Borrowed("BILL-2024-002"),
        customer_name: Cow::Borrowed("ABC Manufacturing Co."),
        customer_id: Cow::Borrowed("CUST002"),
        amount: Cow::Borrowed("$2,850.00"),
        due_date: Cow::Borrowed("2024-01-20"),
        status: Cow::Borrowed("Pending"),
        billing_period: Cow::Borrowed("Dec 2023"),
    },
    BillRow {
        id: Cow::Borrowed("BILL-2024-003"),
        customer_name: Cow::Borrowed("Sarah Johnson"),
        customer_id: Cow::Borrowed("CUST003"),
        amount: Cow::Borrowed("$875.25"),
        due_date: Cow::Borrowed("2024-01-10"),
        status: Cow::Borrowed("Overdue"),
        billing_period: Cow::Borrowed("Dec 2023"),
    },
    BillRow {
        id: Cow::Borrowed("BILL-2024-004"),
        customer_name: Cow::Borrowed("Green Energy Hospital"),
        customer_id: Cow::Borrowed("CUST004"),
        amount: Cow::Borrowed("$5,200.00"),
        due_date: Cow::Borrowed("2024-01-25"),
        status: Cow::Borrowed("Pending"),
        billing_period: Cow::Borrowed("Dec 2023"),
    },
];

const ASSETS: [AssetRow<'static>; 4] = [
    AssetRow {
        id: Cow::Borrowed("SUB001"),
        name: Cow::Borrowed("Central Power Station Alpha"),
        location: Cow::Borrowed("District 1, Sector A"),
        capacity: Cow::Borrowed("500 MVA"),
        voltage: Cow::Borrowed("220/33 kV"),
        status: Cow::Borrowed("Online"),
        load: Cow::Borrowed("85%"),
        last_maintenance: Cow::Borrowed("2024-01-15"),
        coordinates: Cow::Borrowed("40.7128, -74.0060"),
        asset_type: Cow::Borrowed("Primary"),
        priority: Cow::Borrowed("Critical"),
    },
    AssetRow {
        id: Cow::Borrowed("SUB002"),
        name: Cow::Borrowed("Industrial Hub Beta"),
        location: Cow::Borrowed("District 5, Industrial Zone"),
        capacity: Cow::Borrowed("300 MVA"),
        voltage: Cow::Borrowed("132/11 kV"),
        status: Cow::Borrowed("Online"),
        load: Cow::Borrowed("92%"),
        last_maintenance: Cow::Borrowed("2024-01-10"),
        coordinates: Cow::Borrowed("40.7589, -73.9851"),
        asset_type: Cow::Borrowed("Secondary"),
        priority: Cow::Borrowed("High"),
    },
    AssetRow {
        id: Cow::Borrowed("SUB003"),
        name: Cow::Borrowed("Residential Complex Gamma"),
        location: Cow::Borrowed("District 3, Residential Area"),
        capacity: Cow::Borrowed("150 MVA"),
        voltage: Cow::Borrowed("66/11 kV"),
        status: Cow::Borrowed("Maintenance"),
        load: Cow::Borrowed("0%"),
        last_maintenance: Cow::Borrowed("2024-01-20"),
        coordinates: Cow::Borrowed("40.7282, -74.0776"),
        asset_type: Cow::Borrowed("Distribution"),
        priority: Cow::Borrowed("Medium"),
    },
    AssetRow {
        id: Cow::Borrowed("SUB004"),
        name: Cow::Borrowed("Commercial District Delta"),
        location: Cow::Borrowed("District 2, Business Center"),
        capacity: Cow::Borrowed("400 MVA"),
        voltage: Cow::Borrowed("132/33 kV"),
        status: Cow::Borrowed("Online"),
        load: Cow::Borrowed("78%"),
        last_maintenance: Cow::Borrowed("2024-01-08"),
        coordinates: Cow::Borrowed("40.7505, -73.9934"),
        asset_type: Cow::Borrowed("Primary"),
        priority: Cow::Borrowed("High"),
    },
];

/// The console's sample customers.
pub fn sample_customers() -> Result<Vec<Customer>, UnitError> {
    CUSTOMERS.into_iter().map(Customer::try_from).collect()
}

/// The console's sample bills.
pub fn sample_bills() -> Result<Vec<Bill>, UnitError> {
    BILLS.into_iter().map(Bill::try_from).collect()
}

/// The console's sample substations.
pub fn sample_assets() -> Result<Vec<Asset>, UnitError> {
    ASSETS.into_iter().map(Asset::try_from).collect()
}
