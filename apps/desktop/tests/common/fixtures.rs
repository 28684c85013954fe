//! Note contents for tests.

/// A note with `num_cards` level-2 sections, each bolding one keyword.
pub fn sample_note(title: &str, num_cards: usize) -> String {
    let sections: Vec<String> = (0..num_cards)
        .map(|i| {
            format!(
                "## Question {}?\nAnswer {} uses **keyword{}**.\n",
                i + 1,
                i + 1,
                i + 1
            )
        })
        .collect();
    format!("# {}\n\n{}", title, sections.join("\n"))
}

pub const BIO_NOTE: &str = "## What is the powerhouse of the cell?\n\
The **mitochondria**.\n\n\
## What carries genetic information?\n\
**DNA**, packed into **chromosomes**.\n";

pub const CHEM_NOTE: &str = "## What is H2O?\nWater.\n";
