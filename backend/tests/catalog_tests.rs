//! Tests for the category taxonomy and material catalog lookups
//!
//! Covers label fallbacks, subcategory lists, search semantics, and the
//! intersection of the category filter with the search query.

use shared::{
    all_categories, all_materials, category_label, filter_materials, material_by_id,
    materials_by_category, materials_by_subcategory, search_materials, subcategories_for,
    subcategory_label,
};

// =============================================================================
// Taxonomy lookups
// =============================================================================

mod taxonomy {
    use super::*;

    #[test]
    fn every_category_has_fifteen_subcategories() {
        let categories = all_categories();
        assert_eq!(categories.len(), 12);
        for category in categories {
            assert_eq!(
                category.subcategories.len(),
                15,
                "category {} has wrong subcategory count",
                category.value
            );
        }
    }

    #[test]
    fn subcategories_for_known_category() {
        let subs = subcategories_for("flooring");
        assert_eq!(subs.len(), 15);
        assert!(subs.iter().any(|entry| entry.value == "tile"));
    }

    #[test]
    fn subcategories_for_unknown_category_is_empty() {
        assert!(subcategories_for("no_such_category").is_empty());
    }

    #[test]
    fn labels_resolve_for_known_codes() {
        assert_eq!(category_label("me"), "M&E (Mechanical & Electrical)");
        assert_eq!(subcategory_label("flooring", "tile"), "Tile Installation");
    }

    #[test]
    fn labels_fall_back_to_raw_code() {
        assert_eq!(category_label("hvac"), "hvac");
        assert_eq!(subcategory_label("flooring", "unknown_sub"), "unknown_sub");
        assert_eq!(subcategory_label("unknown_cat", "tile"), "tile");
    }
}

// =============================================================================
// Material catalog
// =============================================================================

mod materials {
    use super::*;

    #[test]
    fn catalog_has_fifty_entries() {
        assert_eq!(all_materials().len(), 50);
    }

    #[test]
    fn lookup_by_id() {
        let material = material_by_id("m001").unwrap();
        assert_eq!(material.name, "Grade 20 Concrete");
        assert_eq!(material.unit, "m³");
        assert!(material_by_id("m999").is_none());
    }

    #[test]
    fn by_category_returns_only_that_category() {
        let plumbing = materials_by_category("plumbing");
        assert!(!plumbing.is_empty());
        assert!(plumbing.iter().all(|m| m.category == "plumbing"));
    }

    #[test]
    fn by_subcategory_returns_only_that_subcategory() {
        let pipes = materials_by_subcategory("pipes");
        assert_eq!(pipes.len(), 3);
        assert!(pipes.iter().all(|m| m.subcategory == "pipes"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = search_materials("concrete");
        let upper = search_materials("CONCRETE");
        assert_eq!(lower.len(), upper.len());
        assert!(!lower.is_empty());
    }

    #[test]
    fn search_matches_description_too() {
        // "load bearing" appears only in cement block descriptions
        let hits = search_materials("load bearing");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|m| m.category == "masonry"));
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(search_materials("unobtainium").is_empty());
    }
}

// =============================================================================
// Filter composition: category filter and search query intersect
// =============================================================================

mod filter_composition {
    use super::*;

    #[test]
    fn both_orders_of_composition_agree() {
        let query = "premium";
        let category = "painting";

        // search first, then narrow by category
        let mut search_then_filter: Vec<&str> = search_materials(query)
            .into_iter()
            .filter(|m| m.category == category)
            .map(|m| m.id.as_str())
            .collect();

        // filter by category first, then apply the substring predicate
        let lowercase = query.to_lowercase();
        let mut filter_then_search: Vec<&str> = materials_by_category(category)
            .into_iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&lowercase)
                    || m.description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&lowercase))
                        .unwrap_or(false)
            })
            .map(|m| m.id.as_str())
            .collect();

        search_then_filter.sort_unstable();
        filter_then_search.sort_unstable();
        assert_eq!(search_then_filter, filter_then_search);

        // and the combined filter matches both
        let mut combined: Vec<&str> = filter_materials(Some(category), query)
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        combined.sort_unstable();
        assert_eq!(combined, search_then_filter);
    }

    #[test]
    fn empty_query_degrades_to_category_filter() {
        let filtered = filter_materials(Some("roofing"), "");
        let by_category = materials_by_category("roofing");
        assert_eq!(filtered.len(), by_category.len());
    }

    #[test]
    fn missing_category_degrades_to_search() {
        let filtered = filter_materials(None, "tiles");
        let searched = search_materials("tiles");
        assert_eq!(filtered.len(), searched.len());
    }

    #[test]
    fn disjoint_filters_intersect_to_empty() {
        // sinks exist, but not in the roofing category
        assert!(filter_materials(Some("roofing"), "sink").is_empty());
    }
}
