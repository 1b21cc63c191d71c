//! Static site catalog: page content table and academic programs.

use crate::config::{ABOUT_TEXT, ACADEMICS_TEXT, ADMISSIONS_TEXT, CONTACT_TEXT, HOME_TEXT};
use crate::models::{DetailItem, Page, PageContent};

/// Academic programs listed on the academics page.
pub static PROGRAMS: [DetailItem; 4] = [
    DetailItem {
        title: "Computer Engineering",
        summary: "Digital systems, embedded hardware and the software that runs on them.",
        body: "Students move from logic design and computer architecture to embedded \
               systems and operating systems. The final year is a two-semester capstone \
               building a working device with an industry partner.",
    },
    DetailItem {
        title: "Mechanical Engineering",
        summary: "Machines, materials and manufacturing.",
        body: "Core courses cover statics, dynamics, thermodynamics and materials science. \
               Every student completes a machining practicum in the campus workshop and \
               a senior design project.",
    },
    DetailItem {
        title: "Civil Engineering",
        summary: "Structures, water and transport infrastructure.",
        body: "The program combines structural analysis, geotechnics and hydraulics with \
               field work. Graduates are prepared for professional licensure exams.",
    },
    DetailItem {
        title: "Applied Mathematics",
        summary: "Modelling, statistics and scientific computing.",
        body: "Students study analysis, linear algebra, probability and numerical methods, \
               and apply them in a research seminar with engineering faculty.",
    },
];

/// Look up the static content block for a page.
pub fn page_content(page: Page) -> PageContent {
    match page {
        Page::Home => PageContent {
            page,
            heading: "Welcome",
            tagline: "Engineering education with your hands on the work",
            body: HOME_TEXT,
            entries: &[],
        },
        Page::About => PageContent {
            page,
            heading: "About Us",
            tagline: "Sixty years of practical education",
            body: ABOUT_TEXT,
            entries: &[],
        },
        Page::Academics => PageContent {
            page,
            heading: "Academics",
            tagline: "Undergraduate programs",
            body: ACADEMICS_TEXT,
            entries: &PROGRAMS,
        },
        Page::Admissions => PageContent {
            page,
            heading: "Admissions",
            tagline: "How to apply",
            body: ADMISSIONS_TEXT,
            entries: &[],
        },
        Page::Contact => PageContent {
            page,
            heading: "Contact",
            tagline: "Get in touch",
            body: CONTACT_TEXT,
            entries: &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_content() {
        for page in Page::ALL {
            let content = page_content(page);
            assert_eq!(content.page, page);
            assert!(!content.heading.is_empty());
            assert!(!content.body.trim().is_empty());
        }
    }

    #[test]
    fn test_entries_only_on_drillable_pages() {
        for page in Page::ALL {
            assert_eq!(!page_content(page).entries.is_empty(), page.is_drillable());
        }
    }

    #[test]
    fn test_program_titles_unique() {
        for (i, a) in PROGRAMS.iter().enumerate() {
            for b in &PROGRAMS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
