//! Catalog of storage objects displayed by the dashboard pages.
//!
//! Object names are relative to the configured bucket.

/// Logo shown in the sidebar of every page.
pub const LOGO: &str = "pvz.gif";

/// A precomputed analytics image with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub object: &'static str,
    pub caption: &'static str,
}

/// A column of figures; `width` is its relative share of the row.
#[derive(Debug, Clone, Copy)]
pub struct FigureColumn {
    pub width: u8,
    pub figures: &'static [Figure],
}

/// A row of side-by-side figure columns.
#[derive(Debug, Clone, Copy)]
pub struct FigureRow {
    pub columns: &'static [FigureColumn],
}

/// A tutorial video with optional step-by-step instructions.
#[derive(Debug, Clone, Copy)]
pub struct Tutorial {
    pub title: &'static str,
    pub object: &'static str,
    pub steps: &'static [&'static str],
}

const fn figure(object: &'static str, caption: &'static str) -> Figure {
    Figure { object, caption }
}

const TASK_STEPS: &[&str] = &[
    "Navigate to the <b>Start Task</b> page.",
    "Enter the 8-character code when prompted.",
    "Click the <b>Start</b> button to begin the task.",
    "Wait for the task to complete and view the results.",
];

/// Meta Data page layout, top to bottom.
pub const META_DATA_ROWS: &[FigureRow] = &[
    FigureRow {
        columns: &[
            FigureColumn {
                width: 1,
                figures: &[
                    figure("Images/1.png", "Expression Data Heatmap"),
                    figure("Images/2.png", "SVM Kernel Performance"),
                    figure("Images/7.png", "Tissue Specific Distribution Plots"),
                ],
            },
            FigureColumn {
                width: 2,
                figures: &[figure(
                    "Images/4.png",
                    "Functional Annotation [Root Tissues]",
                )],
            },
        ],
    },
    FigureRow {
        columns: &[
            FigureColumn {
                width: 1,
                figures: &[figure(
                    "Images/11.png",
                    "Functional Annotation [Seed Tissues]",
                )],
            },
            FigureColumn {
                width: 1,
                figures: &[figure("Images/5.png", "WGCNA Heatmaps")],
            },
        ],
    },
    FigureRow {
        columns: &[FigureColumn {
            width: 1,
            figures: &[figure("Images/3.png", "Performance Charts for All Files")],
        }],
    },
    FigureRow {
        columns: &[
            FigureColumn {
                width: 1,
                figures: &[
                    figure(
                        "Images/8.png",
                        "Functional Annotation [Flower Development Stages]",
                    ),
                    figure("Images/9.png", "Functional Annotation [Flower Parts]"),
                ],
            },
            FigureColumn {
                width: 1,
                figures: &[
                    figure("Images/10.png", "Functional Annotation [Green Tissues]"),
                    figure("Images/6.png", "Comparison of lncRNAs, TF, and Non-TF"),
                ],
            },
        ],
    },
];

/// Demonstration page tutorials in display order.
pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        title: "Navigation Tutorial",
        object: "Videos/navigation.mp4",
        steps: &[],
    },
    Tutorial {
        title: "Single Task Tutorial",
        object: "Videos/start_task1.mp4",
        steps: TASK_STEPS,
    },
    Tutorial {
        title: "Multi Task Tutorial",
        object: "Videos/start_task2.mp4",
        steps: TASK_STEPS,
    },
    Tutorial {
        title: "Glossary Tutorial",
        object: "Videos/glossary.mp4",
        steps: &[],
    },
    Tutorial {
        title: "About Tutorial",
        object: "Videos/contact us.mp4",
        steps: &[],
    },
];

/// Every figure on the Meta Data page in render order.
pub fn meta_data_figures() -> impl Iterator<Item = &'static Figure> {
    META_DATA_ROWS
        .iter()
        .flat_map(|row| row.columns.iter())
        .flat_map(|column| column.figures.iter())
}

/// Every object referenced by any page, logo first.
pub fn all_objects() -> Vec<&'static str> {
    std::iter::once(LOGO)
        .chain(meta_data_figures().map(|f| f.object))
        .chain(TUTORIALS.iter().map(|t| t.object))
        .collect()
}
