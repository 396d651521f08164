//! Test fixtures for store extraction

mod extractor_tests;

/// Render one store object literal the way the storefront's data file does
pub fn store_literal(id: u32, name: &str, address: &str, city: &str) -> String {
    format!(
        r#"    {{
        id: {id},
        name: "{name}",
        slug: "store-{id}",
        address: "{address}",
        city: "{city}",
        state: "Karnataka",
        lat: 13.0,
        lng: 77.5,
        tags: ["Area {id}", "Bengaluru"],
    }},"#
    )
}

/// Wrap literals in a typed array export with surrounding module noise
pub fn source_file(array_name: &str, literals: &[String]) -> String {
    format!(
        "import {{ Store }} from '@/types/store';\n\n\
         export const {array_name}: Store[] = [\n{}\n];\n\n\
         export function getStoreBySlug(slug: string) {{\n    return {array_name}.find(s => s.slug === slug);\n}}\n",
        literals.join("\n")
    )
}
