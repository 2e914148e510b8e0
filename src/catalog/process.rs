// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered sequence of development process steps.

use super::{Accent, Icon};

/// A single step of the development process.
///
/// Steps are displayed in ordinal order; ordinals are unique and sequential
/// starting at 1, and every step carries a non-empty task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    /// One-based position in the process sequence.
    pub number: u8,
    pub title: &'static str,
    /// Short description shown on the card.
    pub summary: &'static str,
    /// Longer description shown below the summary.
    pub details: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    /// Key activities carried out during this step.
    pub tasks: &'static [&'static str],
}

const STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: 1,
        title: "Discovery",
        summary: "We analyze your requirements and define project scope.",
        details: "We research your business goals, audience, and competitors \
                  to create a project roadmap with clear milestones.",
        icon: Icon::Search,
        accent: Accent::Blue,
        tasks: &[
            "Stakeholder Interviews",
            "Requirements Gathering",
            "Market Research",
            "Technical Analysis",
            "Project Planning",
        ],
    },
    ProcessStep {
        number: 2,
        title: "Design",
        summary: "We craft intuitive interfaces and seamless experiences.",
        details: "We design user-friendly interfaces with wireframes, \
                  prototypes, and cohesive design systems for consistency.",
        icon: Icon::Pen,
        accent: Accent::Purple,
        tasks: &[
            "UX Research",
            "Wireframing",
            "Prototyping",
            "Visual Design",
            "Usability Testing",
        ],
    },
    ProcessStep {
        number: 3,
        title: "Development",
        summary: "We build scalable solutions with cutting-edge tech.",
        details: "Our engineers write high-performance code, following best \
                  practices and agile sprints for continuous improvement.",
        icon: Icon::Terminal,
        accent: Accent::Green,
        tasks: &[
            "Frontend & Backend Dev",
            "Database Architecture",
            "API Development",
            "Quality Testing",
        ],
    },
    ProcessStep {
        number: 4,
        title: "Deployment",
        summary: "We launch and support your solution.",
        details: "We deploy your solution, provide documentation, training, \
                  and ongoing maintenance for optimal performance.",
        icon: Icon::Server,
        accent: Accent::Amber,
        tasks: &[
            "Production Deployment",
            "Optimization",
            "User Training",
            "Documentation",
            "Support",
        ],
    },
];

/// Returns the process steps in display order.
#[must_use]
pub fn steps() -> &'static [ProcessStep] {
    &STEPS
}
