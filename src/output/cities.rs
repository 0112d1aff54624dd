use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::source::Source;

pub(crate) fn render_cities_table<'a>(
    sources: impl Iterator<Item = &'a dyn Source>,
    use_color: bool,
) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("City", use_color),
        header_cell("Name", use_color),
        header_cell("Aliases", use_color),
        header_cell("File", use_color),
        header_cell("Gender / Birth Year", use_color),
    ]);
    for s in sources {
        let demographics = if s.capabilities().has_demographics {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![
            styled_cell(s.display_name(), None, false),
            styled_cell(s.name(), None, false),
            styled_cell(&s.aliases().join(", "), None, false),
            styled_cell(s.file_name(), None, false),
            styled_cell(demographics, None, false),
        ]);
    }
    format!("{table}\n")
}
