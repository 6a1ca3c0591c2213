// SPDX-License-Identifier: MPL-2.0
//! Tag categories shown in the sidebar and the tags carried by each card.

/// One sidebar group of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    /// Folder under the image base holding `<tag>.png` icons.
    pub folder: &'static str,
    pub tags: &'static [&'static str],
    /// Drawn with a highlighted frame.
    pub emphasized: bool,
}

pub const CATEGORIES: [Category; 5] = [
    Category {
        title: "Data Relationship",
        folder: "dataRelationship",
        tags: &[
            "Deviation",
            "Correlation",
            "Ranking",
            "Distribution",
            "Temporal",
            "Part-to-Whole",
            "Magnitude",
            "Flow",
        ],
        emphasized: true,
    },
    Category {
        title: "Data Scale",
        folder: "dataScale",
        tags: &["Nominal", "Ordinal", "Interval", "Ratio"],
        emphasized: true,
    },
    Category {
        title: "Data-binding type",
        folder: "data-bindingType",
        tags: &["Length", "Area", "Time", "Temperature"],
        emphasized: false,
    },
    Category {
        title: "Data Dimension",
        folder: "dimension",
        tags: &["Univariate", "Bivariate", "Multivariate"],
        emphasized: true,
    },
    Category {
        title: "Analogy strategies",
        folder: "strategies",
        tags: &["Comparison", "Unitization", "Accumulation", "Proportion"],
        emphasized: false,
    },
];

const CARD_TAGS: [(&str, &[&str]); 10] = [
    (
        "Waterfall",
        &[
            "Flow",
            "Part-to-Whole",
            "Magnitude",
            "Bivariate",
            "Interval",
            "Ratio",
            "Accumulation",
            "Length",
            "Time",
        ],
    ),
    (
        "BarChart",
        &["Magnitude", "Bivariate", "Comparison", "Length", "Interval", "Ratio"],
    ),
    (
        "Histogram",
        &["Distribution", "Univariate", "Interval", "Ratio", "Proportion", "Area"],
    ),
    (
        "StackedArea",
        &["Temporal", "Bivariate", "Comparison", "Area", "Ratio", "Accumulation"],
    ),
    (
        "Sunburst",
        &["Part-to-Whole", "Multivariate", "Proportion", "Area", "Interval", "Ratio"],
    ),
    (
        "Treemap",
        &["Part-to-Whole", "Multivariate", "Proportion", "Area", "Interval", "Ratio"],
    ),
    (
        "BubbleChart",
        &["Ranking", "Multivariate", "Ratio", "Unitization", "Area"],
    ),
    (
        "ButterflyChart",
        &["Deviation", "Bivariate", "Nominal", "Ordinal", "Comparison", "Length"],
    ),
    (
        "Heatmap",
        &["Correlation", "Multivariate", "Interval", "Unitization", "Temperature"],
    ),
    (
        "Sankey",
        &["Flow", "Magnitude", "Bivariate", "Proportion", "Interval", "Ratio", "Area"],
    ),
];

/// Tags of the card for chart `id`. Unknown charts have none.
#[must_use]
pub fn card_tags(id: &str) -> &'static [&'static str] {
    CARD_TAGS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, tags)| *tags)
        .unwrap_or_default()
}
