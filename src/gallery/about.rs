// SPDX-License-Identifier: MPL-2.0
//! Static text of the gallery header.

pub const TITLE: &str =
    "From Reality to Recognition: Evaluating Visualization Analogies for Novice Chart Comprehension";

pub const AUTHORS: [&str; 3] = ["Oliver Huang", "Patrick Lee", "Carolina Nobre"];

pub const VENUE: &str =
    "EuroVis 2025 Education - Proceedings of the 27th Eurographics Conference on Visualization";

pub const ABSTRACT: &str = "Novice learners often have difficulty learning new visualization \
types because they tend to interpret novel visualizations through the mental models of simpler \
charts they have previously encountered. Traditional visualization teaching methods, which \
usually rely on directly translating conceptual aspects of data into concrete data \
visualizations, often fail to attend to the needs of novice learners navigating this tension. \
To address this, we systematically explored how analogies can be used to help novices with \
chart comprehension. We introduced visualization analogies: visualizations that map data \
structures to real-world contexts to facilitate an intuitive understanding of novel chart \
types. We evaluated this pedagogical technique using a within-subject study N=128 where we \
taught 8 novel chart types with visualization analogies. Our findings show that visualization \
analogies improve visual analysis skills and help learners transfer their understanding to \
actual charts. They effectively introduce visual embellishments, cater to diverse learning \
preferences, and are preferred by novice learners over traditional chart visualizations. This \
study offers theoretical insights and practical tools to advance visualization education \
through analogical reasoning.";

/// An external link listed under "Resources".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub label: &'static str,
    pub url: &'static str,
}

pub const RESOURCES: [Resource; 2] = [
    Resource {
        label: "Raw Data & Evaluation Code from User Study",
        url: "https://github.com/hivelabuoft/AnalogyVis",
    },
    Resource {
        label: "Qualtrics Survey Questions",
        url: "https://rotman.az1.qualtrics.com/jfe/form/SV_5aNdezrUixEB0rQ",
    },
];

#[must_use]
pub fn authors_line() -> String {
    format!("Authors: {}", AUTHORS.join(", "))
}
