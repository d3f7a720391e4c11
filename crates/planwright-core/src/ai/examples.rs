//! Built-in example content for the free sections
//!
//! Served without a credential so a new user can see what a finished section
//! looks like before configuring an API key.

use crate::plan::SectionId;

/// Example text for a section title, `None` outside the free tier
pub fn example_for_title(section_title: &str) -> Option<&'static str> {
    let section = SectionId::from_title(section_title)?;
    example_for(section)
}

/// Example text for a section, `None` outside the free tier
pub fn example_for(section: SectionId) -> Option<&'static str> {
    match section {
        SectionId::UserIdentification => Some(
            "Independent freelancers (designers, developers, copywriters) aged 25-45 who bill \
             5-20 clients a month.\n\n\
             - Work alone, without an accountant or back office\n\
             - Track invoices in spreadsheets and chase late payments by hand\n\
             - Lose several hours a month to admin and occasionally forget to bill work\n\
             - Want to look professional to larger clients",
        ),
        SectionId::ApplicationObjective => Some(
            "Let freelancers send a professional invoice in under a minute and get paid on \
             time, by turning tracked work into invoices automatically and following up on \
             late payments without awkward emails.",
        ),
        _ => None,
    }
}
