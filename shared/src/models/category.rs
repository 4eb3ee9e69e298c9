//! Construction category taxonomy
//!
//! A fixed two-level taxonomy classifying line items. Not user-mutable;
//! lookups fall back to the raw code when a value has no entry.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::types::LabelValue;

/// A top-level construction category with its subcategories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub value: String,
    pub label: String,
    pub description: String,
    pub subcategories: Vec<LabelValue>,
}

struct TaxonomyRow {
    value: &'static str,
    label: &'static str,
    description: &'static str,
    subcategories: &'static [(&'static str, &'static str)],
}

const TAXONOMY: &[TaxonomyRow] = &[
    TaxonomyRow {
        value: "me",
        label: "M&E (Mechanical & Electrical)",
        description: "Supply & Install",
        subcategories: &[
            ("Electrical Wiring", "electrical_wiring"),
            ("Lighting", "lighting"),
            ("Air Conditioning", "air_conditioning"),
            ("Plumbing", "plumbing"),
            ("Fire Protection", "fire_protection"),
            ("Solar Panels", "solar_panels"),
            ("Security Systems", "security_systems"),
            ("Home Automation", "home_automation"),
            ("Ventilation", "ventilation"),
            ("Generators", "generators"),
            ("Electrical Outlets", "electrical_outlets"),
            ("Circuit Breakers", "circuit_breakers"),
            ("Transformers", "transformers"),
            ("Water Heaters", "water_heaters"),
            ("Gas Piping", "gas_piping"),
        ],
    },
    TaxonomyRow {
        value: "flooring",
        label: "Flooring",
        description: "Supply & Install",
        subcategories: &[
            ("Tile Installation", "tile"),
            ("Timber Flooring", "timber"),
            ("Vinyl", "vinyl"),
            ("Concrete Finishing", "concrete"),
            ("Carpet", "carpet"),
            ("Marble", "marble"),
            ("Terrazzo", "terrazzo"),
            ("Epoxy", "epoxy"),
            ("Laminate", "laminate"),
            ("Bamboo", "bamboo"),
            ("Parquet", "parquet"),
            ("Linoleum", "linoleum"),
            ("Granite", "granite"),
            ("Cork", "cork"),
            ("Rubber", "rubber"),
        ],
    },
    TaxonomyRow {
        value: "painting",
        label: "Painting",
        description: "Supply & Paint",
        subcategories: &[
            ("Interior Walls", "interior_walls"),
            ("Exterior Walls", "exterior_walls"),
            ("Ceiling", "ceiling"),
            ("Doors & Windows", "doors_windows"),
            ("Protective Coating", "protective_coating"),
            ("Texture Finishing", "texture_finishing"),
            ("Anti-Fungal Treatment", "anti_fungal"),
            ("Staining", "staining"),
            ("Waterproofing Paint", "waterproof_paint"),
            ("Decorative Paint", "decorative_paint"),
            ("Priming", "priming"),
            ("Metal Surfaces", "metal_surfaces"),
            ("Wood Surfaces", "wood_surfaces"),
            ("Spray Painting", "spray_painting"),
            ("Enamel Painting", "enamel_painting"),
        ],
    },
    TaxonomyRow {
        value: "carpentry",
        label: "Carpentry",
        description: "Supply & Fabricate",
        subcategories: &[
            ("Custom Cabinetry", "cabinetry"),
            ("Door Installation", "doors"),
            ("Window Frames", "windows"),
            ("Wooden Partitions", "partitions"),
            ("Trim & Molding", "trim"),
            ("Shelving", "shelving"),
            ("Wardrobes", "wardrobes"),
            ("Wooden Flooring", "wooden_flooring"),
            ("Wooden Ceiling", "wooden_ceiling"),
            ("Built-in Furniture", "built_in_furniture"),
            ("Staircase", "staircase"),
            ("Wood Paneling", "wood_paneling"),
            ("Custom Tables", "custom_tables"),
            ("Wood Restoration", "wood_restoration"),
            ("Pergolas", "pergolas"),
        ],
    },
    TaxonomyRow {
        value: "masonry",
        label: "Masonry",
        description: "Supply & Build",
        subcategories: &[
            ("Brick Laying", "brick"),
            ("Stone Work", "stone"),
            ("Concrete Blocks", "concrete_blocks"),
            ("Plastering", "plastering"),
            ("Tiling", "tiling"),
            ("Clay Brick", "clay_brick"),
            ("Granite Work", "granite"),
            ("Marble Work", "marble_work"),
            ("Paver Installation", "pavers"),
            ("Render Finishing", "render"),
            ("Stone Veneer", "stone_veneer"),
            ("Brick Restoration", "brick_restoration"),
            ("Chimney Construction", "chimney"),
            ("Decorative Masonry", "decorative_masonry"),
            ("Concrete Stamping", "concrete_stamping"),
        ],
    },
    TaxonomyRow {
        value: "roofing",
        label: "Roofing",
        description: "Supply & Install",
        subcategories: &[
            ("Tile Roofing", "tile_roofing"),
            ("Metal Roofing", "metal_roofing"),
            ("Waterproofing", "waterproofing"),
            ("Gutters", "gutters"),
            ("Insulation", "insulation"),
            ("Asphalt Shingles", "asphalt_shingles"),
            ("Flashing", "flashing"),
            ("Skylights", "skylights"),
            ("Solar Roof Integration", "solar_roof"),
            ("Green Roofing", "green_roof"),
            ("Roof Ventilation", "roof_ventilation"),
            ("Roof Repairs", "roof_repairs"),
            ("Clay Tile Roofing", "clay_tile"),
            ("Slate Roofing", "slate_roofing"),
            ("Roof Coatings", "roof_coatings"),
        ],
    },
    TaxonomyRow {
        value: "foundation",
        label: "Foundation",
        description: "Supply & Construct",
        subcategories: &[
            ("Excavation", "excavation"),
            ("Concrete Foundation", "concrete_foundation"),
            ("Piling", "piling"),
            ("Retaining Walls", "retaining_walls"),
            ("Waterproofing", "foundation_waterproofing"),
            ("Underpinning", "underpinning"),
            ("Footing", "footing"),
            ("Foundation Repair", "foundation_repair"),
            ("Gravel Beds", "gravel_beds"),
            ("Drainage Systems", "drainage_systems"),
            ("Soil Stabilization", "soil_stabilization"),
            ("Slab Foundation", "slab_foundation"),
            ("Basement Construction", "basement"),
            ("Caisson Foundation", "caisson"),
            ("Pier and Beam", "pier_beam"),
        ],
    },
    TaxonomyRow {
        value: "wall_ceiling",
        label: "Wall & Ceiling",
        description: "Supply & Finish",
        subcategories: &[
            ("Drywall Installation", "drywall"),
            ("Ceiling Installation", "ceiling_install"),
            ("Wall Paneling", "wall_panel"),
            ("Acoustic Treatment", "acoustic"),
            ("Insulation", "wall_insulation"),
            ("Partition Walls", "partition_walls"),
            ("Suspended Ceiling", "suspended_ceiling"),
            ("Cornice Work", "cornice"),
            ("Decorative Molding", "decorative_molding"),
            ("Textured Finishing", "textured_finish"),
            ("Plaster Finishing", "plaster"),
            ("Coffered Ceiling", "coffered_ceiling"),
            ("Gypsum Board", "gypsum"),
            ("PVC Ceiling", "pvc_ceiling"),
            ("Wall Cladding", "wall_cladding_finish"),
        ],
    },
    TaxonomyRow {
        value: "glass_aluminum",
        label: "Glass & Aluminum",
        description: "Supply & Install",
        subcategories: &[
            ("Window Installation", "window_install"),
            ("Glass Doors", "glass_doors"),
            ("Curtain Walls", "curtain_walls"),
            ("Shower Screens", "shower_screens"),
            ("Mirrors", "mirrors"),
            ("Aluminum Fabrication", "aluminum_fab"),
            ("Skylights", "glass_skylights"),
            ("Glass Railing", "glass_railing"),
            ("Storefronts", "storefronts"),
            ("Glass Partitions", "glass_partitions"),
            ("Sliding Systems", "sliding_systems"),
            ("Double Glazing", "double_glazing"),
            ("Frosted Glass", "frosted_glass"),
            ("Tinted Glass", "tinted_glass"),
            ("Glass Flooring", "glass_flooring"),
        ],
    },
    TaxonomyRow {
        value: "landscaping",
        label: "Landscaping",
        description: "Supply & Landscape",
        subcategories: &[
            ("Garden Design", "garden_design"),
            ("Irrigation Systems", "irrigation"),
            ("Lawn Installation", "lawn"),
            ("Hardscaping", "hardscaping"),
            ("Plant Installation", "plants"),
            ("Outdoor Lighting", "outdoor_lighting"),
            ("Water Features", "water_features"),
            ("Retaining Walls", "landscape_walls"),
            ("Decking", "decking"),
            ("Fencing", "fencing"),
            ("Artificial Turf", "artificial_turf"),
            ("Gazebo Construction", "gazebo"),
            ("Pergolas", "landscape_pergolas"),
            ("Ponds", "ponds"),
            ("Pathway Installation", "pathways"),
        ],
    },
    TaxonomyRow {
        value: "finishing",
        label: "Finishing Materials",
        description: "Supply & Apply",
        subcategories: &[
            ("Wallpaper", "wallpaper"),
            ("Interior Trim", "interior_trim"),
            ("Countertops", "countertops"),
            ("Backsplash", "backsplash"),
            ("Architectural Hardware", "arch_hardware"),
            ("Decorative Panels", "decorative_panels"),
            ("Window Treatments", "window_treatments"),
            ("Wall Cladding", "wall_cladding"),
            ("Veneer Finish", "veneer"),
            ("Specialty Coatings", "specialty_coatings"),
            ("Ceramic Tiles", "ceramic_tiles"),
            ("Stone Veneer", "stone_veneer_finish"),
            ("Textured Finishes", "textured_finishes"),
            ("Stucco", "stucco"),
            ("Wainscoting", "wainscoting"),
        ],
    },
    TaxonomyRow {
        value: "other",
        label: "Other",
        description: "Supply & Provide",
        subcategories: &[
            ("Landscaping", "landscaping"),
            ("Demolition", "demolition"),
            ("Cleaning", "cleaning"),
            ("Waste Removal", "waste_removal"),
            ("Miscellaneous", "misc"),
            ("Scaffolding", "scaffolding"),
            ("Site Preparation", "site_prep"),
            ("Construction Management", "construction_management"),
            ("Permits & Approvals", "permits"),
            ("Professional Services", "professional_services"),
            ("Pest Control", "pest_control"),
            ("Temporary Structures", "temporary_structures"),
            ("Surveying", "surveying"),
            ("Safety Equipment", "safety_equipment"),
            ("Rental Equipment", "rental_equipment"),
        ],
    },
];

static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

/// All categories in display order
pub fn all_categories() -> &'static [Category] {
    CATEGORIES.get_or_init(|| {
        TAXONOMY
            .iter()
            .map(|row| Category {
                value: row.value.to_string(),
                label: row.label.to_string(),
                description: row.description.to_string(),
                subcategories: row
                    .subcategories
                    .iter()
                    .map(|(label, value)| LabelValue::new(label, value))
                    .collect(),
            })
            .collect()
    })
}

/// Look up a category by its code
pub fn category_by_value(value: &str) -> Option<&'static Category> {
    all_categories().iter().find(|category| category.value == value)
}

/// Subcategory list for a category; empty when the code is unknown
pub fn subcategories_for(category_value: &str) -> &'static [LabelValue] {
    category_by_value(category_value)
        .map(|category| category.subcategories.as_slice())
        .unwrap_or(&[])
}

/// Display label for a category code, falling back to the raw code
pub fn category_label(category_value: &str) -> String {
    category_by_value(category_value)
        .map(|category| category.label.clone())
        .unwrap_or_else(|| category_value.to_string())
}

/// Display label for a subcategory code, falling back to the raw code
pub fn subcategory_label(category_value: &str, subcategory_value: &str) -> String {
    subcategories_for(category_value)
        .iter()
        .find(|entry| entry.value == subcategory_value)
        .map(|entry| entry.label.clone())
        .unwrap_or_else(|| subcategory_value.to_string())
}
