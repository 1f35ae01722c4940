//! Dashboard chart seeding
//!
//! The dashboard shows a weekly sales line chart and an inventory-health
//! bar chart, both built from fixed sample arrays. `ChartSpec` serializes
//! to the `{type, data: {labels, datasets}, options}` config shape used by
//! 2-D charting libraries, so a front-end can hand it over unchanged.

use serde::Serialize;

/// x-axis labels of the sales chart
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// x-axis labels of the inventory chart
pub const INVENTORY_LABELS: [&str; 3] = ["Products", "Near Expiry", "Low Stock"];

const SALES_COLOR: &str = "#4e73df";
const SALES_FILL: &str = "rgba(78, 115, 223, 0.15)";
const INVENTORY_COLORS: [&str; 3] = ["#1cc88a", "#f6c23e", "#e74a3b"];

/// Sample series shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    /// Daily sales, Monday first
    pub sales: [u64; 7],
    /// Product count, near-expiry count, low-stock count
    pub inventory: [u64; 3],
}

impl SampleData {
    pub const DEFAULT: SampleData = SampleData {
        sales: [120, 150, 90, 200, 180, 220, 160],
        inventory: [120, 15, 8],
    };

    pub fn total_sales(&self) -> u64 {
        self.sales.iter().fold(0u64, |total, &day| total.saturating_add(day))
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_sales: self.total_sales(),
            products: self.inventory[0],
            near_expiry: self.inventory[1],
            low_stock: self.inventory[2],
        }
    }

    /// Line chart of daily sales
    pub fn sales_chart(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            data: ChartData {
                labels: WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    label: "Sales".to_string(),
                    data: self.sales.to_vec(),
                    border_color: Some(SALES_COLOR.to_string()),
                    background_color: Paint::Solid(SALES_FILL.to_string()),
                    fill: true,
                    tension: Some(0.3),
                }],
            },
            options: ChartOptions::without_legend(),
        }
    }

    /// Bar chart of inventory health counts
    pub fn inventory_chart(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: INVENTORY_LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    label: "Inventory".to_string(),
                    data: self.inventory.to_vec(),
                    border_color: None,
                    background_color: Paint::PerPoint(
                        INVENTORY_COLORS.iter().map(|c| c.to_string()).collect(),
                    ),
                    fill: false,
                    tension: None,
                }],
            },
            options: ChartOptions::without_legend(),
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values written into the four stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_sales: u64,
    pub products: u64,
    pub near_expiry: u64,
    pub low_stock: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Which chart canvas a spec belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Sales,
    Inventory,
}

impl ChartSlot {
    /// Canvas element id in the dashboard markup
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartSlot::Sales => "salesChart",
            ChartSlot::Inventory => "stockChart",
        }
    }
}

/// Chart config handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Largest value across all datasets
    pub fn max_value(&self) -> u64 {
        self.data
            .datasets
            .iter()
            .flat_map(|ds| ds.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: Paint,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// One color for the whole series or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl Paint {
    /// Color of the `idx`-th point
    pub fn color_at(&self, idx: usize) -> &str {
        match self {
            Paint::Solid(color) => color,
            Paint::PerPoint(colors) if !colors.is_empty() => &colors[idx % colors.len()],
            Paint::PerPoint(_) => "#999999",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: ChartPlugins,
}

impl ChartOptions {
    pub fn without_legend() -> Self {
        Self {
            responsive: true,
            plugins: ChartPlugins {
                legend: LegendOptions { display: false },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
}
