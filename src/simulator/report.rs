//! Simulation report generation.

use crate::items::types::Quality;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything one run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub kills: u32,
    pub drops: u32,
    /// Drops per quality tier, index 0 = Common.
    pub drops_by_quality: [u32; 5],
    pub items_disassembled: u32,
    pub materials_collected: BTreeMap<String, u32>,

    pub enhance_attempts: u32,
    pub enhance_successes: u32,
    pub enchant_attempts: u32,
    pub enchant_successes: u32,
    pub upgrade_attempts: u32,
    pub upgrade_successes: u32,
    pub weapons_destroyed: u32,

    pub gold_spent: u64,
    pub final_gold: u64,

    /// Best weapon at the end of the run, if one survived.
    pub final_quality: Option<Quality>,
    pub final_enhance_level: u8,
    pub final_effects: usize,
}

impl RunStats {
    pub fn record_drop(&mut self, quality: Quality) {
        self.drops += 1;
        self.drops_by_quality[usize::from(quality.tier() - 1)] += 1;
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub enemy_id: String,

    pub avg_drops: f64,
    pub avg_drops_by_quality: [f64; 5],
    pub avg_items_disassembled: f64,
    pub avg_materials: BTreeMap<String, f64>,

    pub enhance_success_rate: f64,
    pub enchant_success_rate: f64,
    pub upgrade_success_rate: f64,
    pub avg_weapons_destroyed: f64,
    pub avg_gold_spent: f64,
    pub avg_final_enhance_level: f64,

    /// Runs ending with a weapon of each quality, index 0 = Common.
    pub final_quality_distribution: [u32; 5],
    pub runs_without_weapon: u32,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, enemy_id: &str) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));

        let mut avg_drops_by_quality = [0.0; 5];
        for (tier, slot) in avg_drops_by_quality.iter_mut().enumerate() {
            *slot = mean(&runs, |r| f64::from(r.drops_by_quality[tier]));
        }

        let mut avg_materials = BTreeMap::new();
        for run in &runs {
            for (id, qty) in &run.materials_collected {
                *avg_materials.entry(id.clone()).or_insert(0.0) += f64::from(*qty);
            }
        }
        for total in avg_materials.values_mut() {
            *total /= divisor;
        }

        let mut final_quality_distribution = [0u32; 5];
        let mut runs_without_weapon = 0;
        for run in &runs {
            match run.final_quality {
                Some(q) => final_quality_distribution[usize::from(q.tier() - 1)] += 1,
                None => runs_without_weapon += 1,
            }
        }

        let enhance_success_rate =
            success_ratio(&runs, |r| (r.enhance_attempts, r.enhance_successes));
        let enchant_success_rate =
            success_ratio(&runs, |r| (r.enchant_attempts, r.enchant_successes));
        let upgrade_success_rate =
            success_ratio(&runs, |r| (r.upgrade_attempts, r.upgrade_successes));

        Self {
            num_runs,
            enemy_id: enemy_id.to_string(),
            avg_drops: mean(&runs, |r| f64::from(r.drops)),
            avg_drops_by_quality,
            avg_items_disassembled: mean(&runs, |r| f64::from(r.items_disassembled)),
            avg_materials,
            enhance_success_rate,
            enchant_success_rate,
            upgrade_success_rate,
            avg_weapons_destroyed: mean(&runs, |r| f64::from(r.weapons_destroyed)),
            avg_gold_spent: mean(&runs, |r| r.gold_spent as f64),
            avg_final_enhance_level: mean(&runs, |r| f64::from(r.final_enhance_level)),
            final_quality_distribution,
            runs_without_weapon,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    FORGE SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, farming `{}`\n\n",
            self.num_runs, self.enemy_id
        ));

        report.push_str("── DROPS ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Drops / Run:     {:.1}\n", self.avg_drops));
        for quality in Quality::ALL {
            let idx = usize::from(quality.tier() - 1);
            report.push_str(&format!(
                "    {:<10}         {:.2}\n",
                quality.name(),
                self.avg_drops_by_quality[idx]
            ));
        }
        report.push_str(&format!(
            "  Avg Disassembled:    {:.1}\n\n",
            self.avg_items_disassembled
        ));

        report.push_str("── MATERIALS ────────────────────────────────────────────────────\n");
        for (id, qty) in &self.avg_materials {
            report.push_str(&format!("  {:<20} {:.1}\n", id, qty));
        }
        report.push('\n');

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Enhance Success:     {:.1}%\n",
            self.enhance_success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Enchant Success:     {:.1}%\n",
            self.enchant_success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Upgrade Success:     {:.1}%\n",
            self.upgrade_success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Weapons Destroyed:   {:.2}\n",
            self.avg_weapons_destroyed
        ));
        report.push_str(&format!(
            "  Avg Gold Spent:      {:.0}\n",
            self.avg_gold_spent
        ));
        report.push_str(&format!(
            "  Avg Final Enhance:   +{:.1}\n\n",
            self.avg_final_enhance_level
        ));

        report.push_str("── FINAL WEAPON ─────────────────────────────────────────────────\n");
        let runs = f64::from(self.num_runs.max(1));
        for quality in Quality::ALL {
            let count = self.final_quality_distribution[usize::from(quality.tier() - 1)];
            let pct = f64::from(count) / runs * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", quality.name(), pct, bar));
        }
        report.push_str(&format!("  No weapon  {:>5}\n", self.runs_without_weapon));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

/// Pooled successes over pooled attempts across all runs.
fn success_ratio(runs: &[RunStats], f: impl Fn(&RunStats) -> (u32, u32)) -> f64 {
    let (attempts, successes) = runs
        .iter()
        .map(f)
        .fold((0u32, 0u32), |(a, s), (ra, rs)| (a + ra, s + rs));
    if attempts == 0 {
        0.0
    } else {
        f64::from(successes) / f64::from(attempts)
    }
}
