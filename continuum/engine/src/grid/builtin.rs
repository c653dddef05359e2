//! Hand-authored reference tables shipped with the application.
//!
//! Seven abstraction levels by four deployment tiers, every value on 0..100.

/// Abstraction levels, top row first.
pub const LEVELS: [(&str, &str); 7] = [
    ("L1", "Hardware/Infrastructure"),
    ("L2", "Platform"),
    ("L3", "System Libraries & Middleware"),
    ("L4", "Isolations (Virtualization & Containers)"),
    ("L5", "Programming Frameworks & Runtimes"),
    ("L6", "Applications & Services"),
    ("L7", "User"),
];

/// Deployment tiers, leftmost column first.
pub const TIERS: [(&str, &str); 4] =
    [("T1", "Devices"), ("T2", "Edge"), ("T3", "Fog"), ("T4", "Cloud")];

/// Metric name and its level x tier matrix.
pub type Table = (&'static str, [[f64; 4]; 7]);

/// All built-in metrics in display order.
pub const METRICS: [Table; 13] = [
    (
        "Latency",
        [
            [15.0, 30.0, 50.0, 85.0],
            [20.0, 35.0, 55.0, 88.0],
            [25.0, 40.0, 60.0, 90.0],
            [30.0, 45.0, 65.0, 92.0],
            [35.0, 50.0, 70.0, 94.0],
            [40.0, 55.0, 75.0, 96.0],
            [45.0, 60.0, 80.0, 98.0],
        ],
    ),
    (
        "Throughput",
        [
            [25.0, 45.0, 65.0, 95.0],
            [30.0, 50.0, 70.0, 96.0],
            [28.0, 48.0, 68.0, 94.0],
            [26.0, 46.0, 66.0, 92.0],
            [24.0, 44.0, 64.0, 90.0],
            [22.0, 42.0, 62.0, 88.0],
            [20.0, 40.0, 60.0, 85.0],
        ],
    ),
    (
        "Availability",
        [
            [20.0, 40.0, 60.0, 95.0],
            [25.0, 45.0, 65.0, 96.0],
            [30.0, 50.0, 70.0, 97.0],
            [32.0, 52.0, 72.0, 97.0],
            [34.0, 54.0, 74.0, 98.0],
            [36.0, 56.0, 76.0, 98.0],
            [38.0, 58.0, 78.0, 99.0],
        ],
    ),
    (
        "Cost",
        [
            [15.0, 35.0, 60.0, 95.0],
            [18.0, 38.0, 62.0, 94.0],
            [20.0, 40.0, 64.0, 93.0],
            [22.0, 42.0, 66.0, 92.0],
            [24.0, 44.0, 68.0, 91.0],
            [26.0, 46.0, 70.0, 90.0],
            [28.0, 48.0, 72.0, 88.0],
        ],
    ),
    (
        "Elasticity",
        [
            [10.0, 30.0, 60.0, 98.0],
            [12.0, 32.0, 62.0, 97.0],
            [14.0, 34.0, 64.0, 96.0],
            [16.0, 36.0, 66.0, 95.0],
            [18.0, 38.0, 68.0, 94.0],
            [20.0, 40.0, 70.0, 93.0],
            [22.0, 42.0, 72.0, 92.0],
        ],
    ),
    (
        "Reliability",
        [
            [25.0, 45.0, 70.0, 98.0],
            [30.0, 50.0, 72.0, 97.0],
            [32.0, 52.0, 74.0, 96.0],
            [34.0, 54.0, 76.0, 96.0],
            [36.0, 56.0, 78.0, 95.0],
            [38.0, 58.0, 80.0, 94.0],
            [40.0, 60.0, 82.0, 93.0],
        ],
    ),
    (
        "Mobility",
        [
            [95.0, 75.0, 50.0, 15.0],
            [92.0, 72.0, 48.0, 18.0],
            [90.0, 70.0, 46.0, 20.0],
            [88.0, 68.0, 44.0, 22.0],
            [86.0, 66.0, 42.0, 24.0],
            [84.0, 64.0, 40.0, 26.0],
            [82.0, 62.0, 38.0, 28.0],
        ],
    ),
    (
        "Distributedness",
        [
            [20.0, 45.0, 70.0, 95.0],
            [22.0, 47.0, 72.0, 94.0],
            [24.0, 49.0, 74.0, 93.0],
            [26.0, 51.0, 76.0, 92.0],
            [28.0, 53.0, 78.0, 91.0],
            [30.0, 55.0, 80.0, 90.0],
            [32.0, 57.0, 82.0, 88.0],
        ],
    ),
    (
        "Democratization (Ease of use & Programming)",
        [
            [15.0, 20.0, 25.0, 30.0],
            [25.0, 30.0, 35.0, 40.0],
            [35.0, 40.0, 45.0, 50.0],
            [45.0, 50.0, 55.0, 60.0],
            [60.0, 65.0, 70.0, 75.0],
            [75.0, 80.0, 85.0, 90.0],
            [88.0, 90.0, 92.0, 95.0],
        ],
    ),
    (
        "Governance",
        [
            [25.0, 45.0, 65.0, 90.0],
            [28.0, 48.0, 68.0, 91.0],
            [30.0, 50.0, 70.0, 92.0],
            [32.0, 52.0, 72.0, 93.0],
            [34.0, 54.0, 74.0, 94.0],
            [36.0, 56.0, 76.0, 95.0],
            [38.0, 58.0, 78.0, 96.0],
        ],
    ),
    (
        "AI-Friendliness",
        [
            [15.0, 35.0, 60.0, 95.0],
            [18.0, 38.0, 62.0, 94.0],
            [20.0, 40.0, 64.0, 93.0],
            [22.0, 42.0, 66.0, 92.0],
            [30.0, 50.0, 72.0, 96.0],
            [35.0, 55.0, 75.0, 97.0],
            [38.0, 58.0, 78.0, 95.0],
        ],
    ),
    (
        "Sustainability",
        [
            [30.0, 50.0, 70.0, 95.0],
            [32.0, 52.0, 72.0, 94.0],
            [34.0, 54.0, 74.0, 93.0],
            [36.0, 56.0, 76.0, 92.0],
            [38.0, 58.0, 78.0, 91.0],
            [40.0, 60.0, 80.0, 90.0],
            [42.0, 62.0, 82.0, 88.0],
        ],
    ),
    (
        "Security & Trustworthiness",
        [
            [85.0, 70.0, 50.0, 40.0],
            [82.0, 68.0, 52.0, 42.0],
            [80.0, 66.0, 54.0, 44.0],
            [78.0, 64.0, 56.0, 46.0],
            [76.0, 62.0, 58.0, 50.0],
            [74.0, 60.0, 60.0, 55.0],
            [72.0, 58.0, 62.0, 60.0],
        ],
    ),
];
