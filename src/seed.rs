//! The reference catalog: the fixed product list seeded on first run.
//!
//! Every record is locked (identity fields read-only in the editor, immune to
//! bulk delete) and active. Ids are generated at seed time and then persist;
//! the list itself only changes with a code change.

use crate::{
    core::pricing,
    entities::{Category, Product},
};
use uuid::Uuid;

fn locked(code: &str, name: &str, category: Category, dimensions: &str, cost: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: name.to_string(),
        category,
        dimensions: Some(dimensions.to_string()),
        description: None,
        original_price: cost,
        selling_price: pricing::selling_from_cost(cost),
        images: Vec::new(),
        is_locked: true,
        is_active: true,
    }
}

/// Builds the full reference catalog with fresh ids.
#[must_use]
pub fn reference_catalog() -> Vec<Product> {
    use Category::{
        Cabinet, ConferenceTable, ExecutiveChair, ExecutiveTable, OfficeChair, OfficeTable,
        Pedestal, ReceptionDesk, Sofa, Workstation,
    };
    vec![
        locked("CH-100", "Ergonomic Mesh Task Chair", OfficeChair, "60 x 60 x 110 cm", 4500),
        locked("CH-101", "Mid-Back Mesh Office Chair", OfficeChair, "58 x 58 x 102 cm", 3800),
        locked("CH-102", "Fabric Task Chair with Armrests", OfficeChair, "57 x 57 x 98 cm", 2900),
        locked("CH-103", "Drafting Chair with Footring", OfficeChair, "55 x 55 x 125 cm", 5200),
        locked("CH-104", "Stackable Visitor Chair", OfficeChair, "54 x 56 x 85 cm", 1850),
        locked("CH-105", "Sled-Base Training Chair", OfficeChair, "55 x 58 x 83 cm", 2100),
        locked("EC-110", "High-Back Leather Executive Chair", ExecutiveChair, "68 x 70 x 120 cm", 9800),
        locked("EC-111", "Reclining Executive Chair with Headrest", ExecutiveChair, "70 x 72 x 125 cm", 11_500),
        locked("EC-112", "PU Leather Manager Chair", ExecutiveChair, "65 x 68 x 115 cm", 7400),
        locked("EC-113", "Ergonomic Executive Mesh Chair", ExecutiveChair, "66 x 66 x 122 cm", 8900),
        locked("TB-200", "Staff Desk with Side Drawer", OfficeTable, "120 x 60 x 75 cm", 5600),
        locked("TB-201", "Writing Desk with Cable Tray", OfficeTable, "100 x 60 x 75 cm", 4300),
        locked("TB-202", "Computer Table with Keyboard Tray", OfficeTable, "120 x 70 x 75 cm", 4900),
        locked("TB-203", "Height-Adjustable Sit-Stand Desk", OfficeTable, "140 x 70 x 75-120 cm", 15_800),
        locked("TB-204", "Folding Utility Table", OfficeTable, "180 x 60 x 74 cm", 3600),
        locked("ET-210", "L-Shaped Executive Desk", ExecutiveTable, "180 x 160 x 76 cm", 18_500),
        locked("ET-211", "Executive Desk with Mobile Pedestal", ExecutiveTable, "160 x 80 x 76 cm", 14_200),
        locked("ET-212", "Walnut Veneer Director Desk", ExecutiveTable, "200 x 90 x 76 cm", 23_800),
        locked("CT-220", "10-Seater Boardroom Table", ConferenceTable, "300 x 120 x 75 cm", 32_000),
        locked("CT-221", "Oval Conference Table", ConferenceTable, "240 x 110 x 75 cm", 24_500),
        locked("CT-222", "Modular Meeting Table (6-Seater)", ConferenceTable, "180 x 90 x 75 cm", 16_400),
        locked("RD-230", "Curved Reception Counter", ReceptionDesk, "240 x 80 x 110 cm", 28_900),
        locked("RD-231", "Straight Reception Desk with Glass Top", ReceptionDesk, "180 x 70 x 105 cm", 19_700),
        locked("SF-240", "3-Seater Office Sofa", Sofa, "190 x 80 x 78 cm", 16_800),
        locked("SF-241", "2-Seater Lounge Sofa", Sofa, "140 x 78 x 78 cm", 12_900),
        locked("SF-242", "Single-Seater Visitor Sofa", Sofa, "85 x 78 x 78 cm", 7800),
        locked("SF-243", "Modular Reception Sofa Set", Sofa, "260 x 80 x 78 cm", 26_500),
        locked("CB-250", "4-Layer Steel Filing Cabinet", Cabinet, "46 x 62 x 132 cm", 8700),
        locked("CB-251", "Swing-Door Steel Cabinet", Cabinet, "90 x 45 x 185 cm", 10_400),
        locked("CB-252", "Lateral Filing Cabinet (3-Drawer)", Cabinet, "90 x 45 x 104 cm", 9300),
        locked("CB-253", "Open-Shelf Wooden Bookcase", Cabinet, "80 x 30 x 180 cm", 6200),
        locked("CB-254", "Locker Cabinet (6-Door)", Cabinet, "90 x 45 x 185 cm", 11_800),
        locked("PD-260", "Mobile Pedestal (3-Drawer)", Pedestal, "40 x 50 x 60 cm", 4600),
        locked("PD-261", "Fixed Pedestal with Lock", Pedestal, "40 x 55 x 65 cm", 3900),
        locked("WS-270", "2-Person Workstation with Partition", Workstation, "240 x 60 x 105 cm", 21_600),
        locked("WS-271", "4-Person Cluster Workstation", Workstation, "240 x 120 x 105 cm", 38_400),
        locked("WS-272", "6-Person Linear Workstation", Workstation, "360 x 60 x 105 cm", 52_700),
        locked("WS-273", "Single Cubicle with Overhead Shelf", Workstation, "120 x 60 x 150 cm", 13_600),
    ]
}
