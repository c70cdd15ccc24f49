//! Loads both schema modules and prints a summary plus a Turtle preview.
//!
//! Run with: `cargo run --example dump_schema -p dima-ontology`

use dima_ontology::{registry, serializer, ModuleId};

fn main() {
    for id in ModuleId::ALL {
        let schema = match registry::load(id) {
            Ok(schema) => schema,
            Err(e) => {
                eprintln!("{id}: {e}");
                std::process::exit(1);
            }
        };
        let module = schema.module();
        let ns = schema.namespace();
        println!(
            "  {:6} {:50} {:>2} classes, {:>2} properties, {:>2} individuals",
            ns.prefix,
            ns.iri,
            module.classes.len(),
            module.properties.len(),
            module.individuals.len(),
        );

        let turtle = serializer::turtle::to_turtle(&schema.tbox_graph(), &schema.prefixes());
        let preview_end = turtle
            .char_indices()
            .nth(300)
            .map_or(turtle.len(), |(i, _)| i);
        println!("{}...\n", &turtle[..preview_end]);
    }
}
