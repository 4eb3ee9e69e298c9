//! Material price list and lookup functions
//!
//! The catalog is static reference data loaded once at startup. Selecting a
//! material into a line item copies its fields at selection time; later
//! catalog changes never propagate into existing items.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pre-priced catalog entry usable to pre-fill a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub unit: String,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw catalog row; unit price in cents so the table stays const
struct CatalogRow {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    unit: &'static str,
    unit_price_cents: i64,
    description: &'static str,
}

const CATALOG: &[CatalogRow] = &[
    // Concrete works
    CatalogRow { id: "m001", name: "Grade 20 Concrete", category: "concrete", subcategory: "readyMix", unit: "m³", unit_price_cents: 28000, description: "Ready-mixed concrete for general applications" },
    CatalogRow { id: "m002", name: "Grade 30 Concrete", category: "concrete", subcategory: "readyMix", unit: "m³", unit_price_cents: 32000, description: "Higher strength concrete for structural elements" },
    CatalogRow { id: "m003", name: "Grade 35 Concrete", category: "concrete", subcategory: "readyMix", unit: "m³", unit_price_cents: 35000, description: "High strength concrete for critical structural elements" },
    CatalogRow { id: "m004", name: "Steel Reinforcement (10mm)", category: "concrete", subcategory: "reinforcement", unit: "ton", unit_price_cents: 350000, description: "10mm diameter steel bars for concrete reinforcement" },
    CatalogRow { id: "m005", name: "Steel Reinforcement (12mm)", category: "concrete", subcategory: "reinforcement", unit: "ton", unit_price_cents: 340000, description: "12mm diameter steel bars for concrete reinforcement" },
    CatalogRow { id: "m006", name: "Steel Reinforcement (16mm)", category: "concrete", subcategory: "reinforcement", unit: "ton", unit_price_cents: 330000, description: "16mm diameter steel bars for concrete reinforcement" },
    // Brickwork
    CatalogRow { id: "m007", name: "Clay Bricks", category: "masonry", subcategory: "bricks", unit: "pcs", unit_price_cents: 85, description: "Standard clay bricks for walls and partitions" },
    CatalogRow { id: "m008", name: "Cement Blocks (4\")", category: "masonry", subcategory: "blocks", unit: "pcs", unit_price_cents: 250, description: "4-inch cement blocks for non-load bearing walls" },
    CatalogRow { id: "m009", name: "Cement Blocks (6\")", category: "masonry", subcategory: "blocks", unit: "pcs", unit_price_cents: 380, description: "6-inch cement blocks for load bearing walls" },
    // Flooring
    CatalogRow { id: "m010", name: "Ceramic Tiles (Basic)", category: "flooring", subcategory: "ceramic", unit: "m²", unit_price_cents: 2500, description: "Basic ceramic tiles for standard applications" },
    CatalogRow { id: "m011", name: "Ceramic Tiles (Premium)", category: "flooring", subcategory: "ceramic", unit: "m²", unit_price_cents: 4500, description: "Premium grade ceramic tiles with enhanced durability" },
    CatalogRow { id: "m012", name: "Porcelain Tiles", category: "flooring", subcategory: "porcelain", unit: "m²", unit_price_cents: 6500, description: "High quality porcelain tiles for premium flooring" },
    CatalogRow { id: "m013", name: "Vinyl Flooring", category: "flooring", subcategory: "vinyl", unit: "m²", unit_price_cents: 3500, description: "Durable vinyl flooring for high traffic areas" },
    CatalogRow { id: "m014", name: "Hardwood Flooring", category: "flooring", subcategory: "wood", unit: "m²", unit_price_cents: 12000, description: "Premium hardwood flooring for luxury spaces" },
    // Painting
    CatalogRow { id: "m015", name: "Interior Paint (Basic)", category: "painting", subcategory: "interior", unit: "liter", unit_price_cents: 1800, description: "Standard interior wall paint" },
    CatalogRow { id: "m016", name: "Interior Paint (Premium)", category: "painting", subcategory: "interior", unit: "liter", unit_price_cents: 3500, description: "Premium interior paint with enhanced durability" },
    CatalogRow { id: "m017", name: "Exterior Paint (Basic)", category: "painting", subcategory: "exterior", unit: "liter", unit_price_cents: 2500, description: "Standard weather-resistant exterior paint" },
    CatalogRow { id: "m018", name: "Exterior Paint (Premium)", category: "painting", subcategory: "exterior", unit: "liter", unit_price_cents: 4500, description: "Premium exterior paint with enhanced weather resistance" },
    CatalogRow { id: "m019", name: "Primer", category: "painting", subcategory: "primers", unit: "liter", unit_price_cents: 1500, description: "Surface preparation primer for painting applications" },
    // Plumbing
    CatalogRow { id: "m020", name: "PVC Pipes (1/2\")", category: "plumbing", subcategory: "pipes", unit: "m", unit_price_cents: 350, description: "Half-inch PVC pipes for water supply" },
    CatalogRow { id: "m021", name: "PVC Pipes (3/4\")", category: "plumbing", subcategory: "pipes", unit: "m", unit_price_cents: 520, description: "Three-quarter-inch PVC pipes for water supply" },
    CatalogRow { id: "m022", name: "PVC Pipes (1\")", category: "plumbing", subcategory: "pipes", unit: "m", unit_price_cents: 780, description: "One-inch PVC pipes for water supply" },
    CatalogRow { id: "m023", name: "Basic Sink", category: "plumbing", subcategory: "fixtures", unit: "pcs", unit_price_cents: 12000, description: "Standard stainless steel kitchen sink" },
    CatalogRow { id: "m024", name: "Premium Sink", category: "plumbing", subcategory: "fixtures", unit: "pcs", unit_price_cents: 35000, description: "Premium stainless steel kitchen sink with accessories" },
    CatalogRow { id: "m025", name: "Basic Toilet Set", category: "plumbing", subcategory: "fixtures", unit: "set", unit_price_cents: 28000, description: "Standard toilet bowl and tank set" },
    CatalogRow { id: "m026", name: "Premium Toilet Set", category: "plumbing", subcategory: "fixtures", unit: "set", unit_price_cents: 65000, description: "Premium toilet set with water-saving features" },
    // Electrical
    CatalogRow { id: "m027", name: "Electrical Cables (1.5mm²)", category: "electrical", subcategory: "wiring", unit: "m", unit_price_cents: 280, description: "1.5mm² electrical cables for lighting circuits" },
    CatalogRow { id: "m028", name: "Electrical Cables (2.5mm²)", category: "electrical", subcategory: "wiring", unit: "m", unit_price_cents: 450, description: "2.5mm² electrical cables for power outlets" },
    CatalogRow { id: "m029", name: "Electrical Cables (4.0mm²)", category: "electrical", subcategory: "wiring", unit: "m", unit_price_cents: 720, description: "4.0mm² electrical cables for heavy appliances" },
    CatalogRow { id: "m030", name: "Standard Switch", category: "electrical", subcategory: "accessories", unit: "pcs", unit_price_cents: 850, description: "Basic wall switch for lighting control" },
    CatalogRow { id: "m031", name: "Premium Switch", category: "electrical", subcategory: "accessories", unit: "pcs", unit_price_cents: 2500, description: "Premium wall switch with modern design" },
    CatalogRow { id: "m032", name: "Standard Socket Outlet", category: "electrical", subcategory: "accessories", unit: "pcs", unit_price_cents: 1200, description: "Basic electrical socket for general use" },
    CatalogRow { id: "m033", name: "Premium Socket Outlet", category: "electrical", subcategory: "accessories", unit: "pcs", unit_price_cents: 3500, description: "Premium electrical socket with USB charging ports" },
    // Roofing
    CatalogRow { id: "m034", name: "Concrete Roof Tiles", category: "roofing", subcategory: "tiles", unit: "m²", unit_price_cents: 4500, description: "Durable concrete roof tiles for residential buildings" },
    CatalogRow { id: "m035", name: "Clay Roof Tiles", category: "roofing", subcategory: "tiles", unit: "m²", unit_price_cents: 6500, description: "Traditional clay roof tiles with excellent aesthetics" },
    CatalogRow { id: "m036", name: "Metal Roofing Sheets", category: "roofing", subcategory: "metal", unit: "m²", unit_price_cents: 3800, description: "Lightweight metal sheets for quick installation" },
    CatalogRow { id: "m037", name: "Waterproofing Membrane", category: "roofing", subcategory: "waterproofing", unit: "m²", unit_price_cents: 2500, description: "Waterproofing membrane for flat roofs" },
    // Carpentry
    CatalogRow { id: "m038", name: "Wooden Door (Interior)", category: "carpentry", subcategory: "doors", unit: "pcs", unit_price_cents: 28000, description: "Standard wooden interior door" },
    CatalogRow { id: "m039", name: "Wooden Door (Exterior)", category: "carpentry", subcategory: "doors", unit: "pcs", unit_price_cents: 45000, description: "Heavy-duty wooden exterior door" },
    CatalogRow { id: "m040", name: "Wooden Window Frame", category: "carpentry", subcategory: "windows", unit: "pcs", unit_price_cents: 18000, description: "Wooden window frame for standard openings" },
    CatalogRow { id: "m041", name: "Kitchen Cabinet (Basic)", category: "carpentry", subcategory: "cabinets", unit: "m", unit_price_cents: 35000, description: "Basic kitchen cabinets with standard finishes" },
    CatalogRow { id: "m042", name: "Kitchen Cabinet (Premium)", category: "carpentry", subcategory: "cabinets", unit: "m", unit_price_cents: 75000, description: "Premium kitchen cabinets with high-end finishes" },
    // HVAC
    CatalogRow { id: "m043", name: "Split AC Unit (1.0HP)", category: "hvac", subcategory: "ac", unit: "set", unit_price_cents: 120000, description: "1.0 horsepower split air conditioning unit" },
    CatalogRow { id: "m044", name: "Split AC Unit (1.5HP)", category: "hvac", subcategory: "ac", unit: "set", unit_price_cents: 160000, description: "1.5 horsepower split air conditioning unit" },
    CatalogRow { id: "m045", name: "Split AC Unit (2.0HP)", category: "hvac", subcategory: "ac", unit: "set", unit_price_cents: 220000, description: "2.0 horsepower split air conditioning unit" },
    CatalogRow { id: "m046", name: "Ceiling Fan", category: "hvac", subcategory: "fans", unit: "pcs", unit_price_cents: 15000, description: "Standard ceiling fan with variable speed" },
    // Landscaping
    CatalogRow { id: "m047", name: "Garden Soil", category: "landscaping", subcategory: "soil", unit: "m³", unit_price_cents: 8500, description: "Quality topsoil for garden areas" },
    CatalogRow { id: "m048", name: "Decorative Gravel", category: "landscaping", subcategory: "decorative", unit: "m³", unit_price_cents: 12000, description: "Decorative gravel for garden pathways" },
    CatalogRow { id: "m049", name: "Grass Turf", category: "landscaping", subcategory: "plants", unit: "m²", unit_price_cents: 1800, description: "Natural grass turf for lawn areas" },
    CatalogRow { id: "m050", name: "Outdoor Pavers", category: "landscaping", subcategory: "pavers", unit: "m²", unit_price_cents: 5500, description: "Concrete pavers for outdoor patios and walkways" },
];

static MATERIALS: OnceLock<Vec<Material>> = OnceLock::new();

impl From<&CatalogRow> for Material {
    fn from(row: &CatalogRow) -> Self {
        Material {
            id: row.id.to_string(),
            name: row.name.to_string(),
            category: row.category.to_string(),
            subcategory: row.subcategory.to_string(),
            unit: row.unit.to_string(),
            unit_price: Decimal::new(row.unit_price_cents, 2),
            description: if row.description.is_empty() {
                None
            } else {
                Some(row.description.to_string())
            },
        }
    }
}

/// All catalog materials in their canonical order
pub fn all_materials() -> &'static [Material] {
    MATERIALS.get_or_init(|| CATALOG.iter().map(Material::from).collect())
}

/// Materials belonging to a category
pub fn materials_by_category(category: &str) -> Vec<&'static Material> {
    all_materials()
        .iter()
        .filter(|material| material.category == category)
        .collect()
}

/// Materials belonging to a subcategory
pub fn materials_by_subcategory(subcategory: &str) -> Vec<&'static Material> {
    all_materials()
        .iter()
        .filter(|material| material.subcategory == subcategory)
        .collect()
}

/// Look up a material by id
pub fn material_by_id(id: &str) -> Option<&'static Material> {
    all_materials().iter().find(|material| material.id == id)
}

/// Case-insensitive substring search against name and description
///
/// A hit in either field includes the material.
pub fn search_materials(query: &str) -> Vec<&'static Material> {
    let query = query.to_lowercase();
    all_materials()
        .iter()
        .filter(|material| matches_query(material, &query))
        .collect()
}

/// Combined category filter and search query
///
/// When both are present the result is their intersection; an empty query
/// degrades to the plain category filter, and a missing category to the
/// plain search.
pub fn filter_materials(category: Option<&str>, query: &str) -> Vec<&'static Material> {
    let query = query.to_lowercase();
    all_materials()
        .iter()
        .filter(|material| category.map_or(true, |c| material.category == c))
        .filter(|material| query.is_empty() || matches_query(material, &query))
        .collect()
}

fn matches_query(material: &Material, lowercase_query: &str) -> bool {
    material.name.to_lowercase().contains(lowercase_query)
        || material
            .description
            .as_ref()
            .map(|d| d.to_lowercase().contains(lowercase_query))
            .unwrap_or(false)
}
