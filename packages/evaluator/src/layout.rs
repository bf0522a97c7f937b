//! Layout assembly: which enabled sections land in which column, in order.

use vitae_model::{Column, LayoutType, SectionDescriptor};

/// Sections per column, each in render order
#[derive(Debug, Default, PartialEq)]
pub struct Columns<'a> {
    pub main: Vec<&'a SectionDescriptor>,
    pub sidebar: Vec<&'a SectionDescriptor>,
}

impl<'a> Columns<'a> {
    pub fn len(&self) -> usize {
        self.main.len() + self.sidebar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Main then sidebar
    pub fn iter(&self) -> impl Iterator<Item = &'a SectionDescriptor> + '_ {
        self.main.iter().chain(self.sidebar.iter()).copied()
    }
}

/// Bucket enabled, non-header sections by column and sort each bucket by `order`.
///
/// The sort is stable, so equal orders keep their configured position.
/// A single-column layout puts everything in `main`.
pub fn assemble(sections: &[SectionDescriptor], layout: LayoutType) -> Columns<'_> {
    let mut columns = Columns::default();

    for section in sections.iter().filter(|s| s.enabled && !s.is_header()) {
        match (layout.is_single_column(), section.column_or_default()) {
            (false, Column::Sidebar) => columns.sidebar.push(section),
            _ => columns.main.push(section),
        }
    }

    columns.main.sort_by_key(|s| s.order);
    columns.sidebar.sort_by_key(|s| s.order);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_model::SectionType;

    fn ids<'a>(sections: &[&'a SectionDescriptor]) -> Vec<&'a str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    fn scenario() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new(SectionType::Skills, "skills", 2).in_column(Column::Sidebar),
            SectionDescriptor::new(SectionType::Experience, "exp", 1).in_column(Column::Main),
        ]
    }

    #[test]
    fn test_two_column_buckets() {
        let sections = scenario();
        let columns = assemble(&sections, LayoutType::TwoColumnRight);
        assert_eq!(ids(&columns.main), vec!["exp"]);
        assert_eq!(ids(&columns.sidebar), vec!["skills"]);
    }

    #[test]
    fn test_single_column_coerces_to_main() {
        let sections = scenario();
        let columns = assemble(&sections, LayoutType::SingleColumn);
        assert_eq!(ids(&columns.main), vec!["exp", "skills"]);
        assert!(columns.sidebar.is_empty());
    }

    #[test]
    fn test_disabled_and_header_are_skipped() {
        let sections = vec![
            SectionDescriptor::new(SectionType::Header, "header", 0),
            SectionDescriptor::new(SectionType::Summary, "summary", 1),
            SectionDescriptor::new(SectionType::Projects, "projects", 2).disabled(),
        ];
        let columns = assemble(&sections, LayoutType::TwoColumnLeft);
        assert_eq!(ids(&columns.main), vec!["summary"]);
        assert_eq!(columns.len(), 1);
    }

    #[test]
    fn test_ties_keep_configured_position() {
        let sections = vec![
            SectionDescriptor::new(SectionType::Custom, "b", 3),
            SectionDescriptor::new(SectionType::Custom, "a", 3),
            SectionDescriptor::new(SectionType::Custom, "c", 1),
        ];
        let columns = assemble(&sections, LayoutType::SingleColumn);
        assert_eq!(ids(&columns.main), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_no_enabled_section_is_dropped() {
        let sections = vitae_model::TemplateConfig::default().sections;
        let enabled = sections.iter().filter(|s| s.enabled && !s.is_header()).count();

        for layout in [LayoutType::SingleColumn, LayoutType::TwoColumnLeft, LayoutType::TwoColumnRight] {
            assert_eq!(assemble(&sections, layout).len(), enabled);
        }
    }
}
