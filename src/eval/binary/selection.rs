//! Selection of optional metrics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional metrics computed on request
///
/// Accuracy, sensitivity and specificity are always computed and are
/// therefore not listed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    /// Mean per-class recall
    #[serde(rename = "bal_acc")]
    BalancedAccuracy,
    /// Youden's J-statistic
    #[serde(rename = "youden")]
    Youden,
    /// Area under the ROC curve
    #[serde(rename = "auroc")]
    Auroc,
    /// `1 - accuracy`
    #[serde(rename = "err_rate")]
    ErrorRate,
    /// `1 - balanced accuracy`
    #[serde(rename = "bal_err_rate")]
    BalancedErrorRate,
}

impl Metric {
    /// All optional metrics in report order
    pub const ALL: [Metric; 5] = [
        Metric::BalancedAccuracy,
        Metric::Youden,
        Metric::Auroc,
        Metric::ErrorRate,
        Metric::BalancedErrorRate,
    ];

    /// Short key used in result maps, configs and the CLI
    pub fn key(&self) -> &'static str {
        match self {
            Metric::BalancedAccuracy => "bal_acc",
            Metric::Youden => "youden",
            Metric::Auroc => "auroc",
            Metric::ErrorRate => "err_rate",
            Metric::BalancedErrorRate => "bal_err_rate",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::BalancedAccuracy => "Balanced accuracy",
            Metric::Youden => "Youden's J",
            Metric::Auroc => "AUROC",
            Metric::ErrorRate => "Error rate",
            Metric::BalancedErrorRate => "Balanced error rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bal_acc" | "balanced_accuracy" => Ok(Metric::BalancedAccuracy),
            "youden" | "youden_j" => Ok(Metric::Youden),
            "auroc" | "roc_auc" => Ok(Metric::Auroc),
            "err_rate" | "error_rate" => Ok(Metric::ErrorRate),
            "bal_err_rate" | "balanced_error_rate" => Ok(Metric::BalancedErrorRate),
            _ => Err(format!(
                "Unknown metric: {s}. Valid metrics: bal_acc, youden, auroc, err_rate, bal_err_rate"
            )),
        }
    }
}

/// Set of requested optional metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricSet {
    pub bal_acc: bool,
    pub youden: bool,
    pub auroc: bool,
    pub err_rate: bool,
    pub bal_err_rate: bool,
}

impl MetricSet {
    /// No optional metrics
    pub fn none() -> Self {
        Self::default()
    }

    /// Every optional metric
    pub fn all() -> Self {
        Metric::ALL.into_iter().collect()
    }

    /// Add a metric
    pub fn with(mut self, metric: Metric) -> Self {
        self.insert(metric);
        self
    }

    /// Request `metric`
    pub fn insert(&mut self, metric: Metric) {
        *self.flag_mut(metric) = true;
    }

    /// Whether `metric` is requested
    pub fn contains(&self, metric: Metric) -> bool {
        match metric {
            Metric::BalancedAccuracy => self.bal_acc,
            Metric::Youden => self.youden,
            Metric::Auroc => self.auroc,
            Metric::ErrorRate => self.err_rate,
            Metric::BalancedErrorRate => self.bal_err_rate,
        }
    }

    /// Whether no optional metric is requested
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|&m| !self.contains(m))
    }

    /// Requested metrics in report order
    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL.into_iter().filter(move |&m| self.contains(m))
    }

    fn flag_mut(&mut self, metric: Metric) -> &mut bool {
        match metric {
            Metric::BalancedAccuracy => &mut self.bal_acc,
            Metric::Youden => &mut self.youden,
            Metric::Auroc => &mut self.auroc,
            Metric::ErrorRate => &mut self.err_rate,
            Metric::BalancedErrorRate => &mut self.bal_err_rate,
        }
    }
}

impl FromIterator<Metric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        let mut set = Self::none();
        for metric in iter {
            set.insert(metric);
        }
        set
    }
}
