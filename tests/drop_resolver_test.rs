//! Drop resolver tests: gates, guaranteed drops, first-kill bonuses and
//! kill-history persistence.

use gearforge::core::constants::KILL_HISTORY_KEY;
use gearforge::drops::{DropEntry, DropResolver, DropTable};
use gearforge::items::catalog::Catalog;
use gearforge::utils::persistence::{FileStorage, MemoryStorage, Storage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::sync::Arc;

fn builtin_resolver() -> DropResolver {
    DropResolver::with_builtin_tables(Arc::new(Catalog::builtin()), Box::new(MemoryStorage::new()))
}

fn resolver_with(tables: Vec<DropTable>) -> DropResolver {
    DropResolver::new(
        Arc::new(Catalog::builtin()),
        tables,
        Box::new(MemoryStorage::new()),
    )
}

// =========================================================================
// Guaranteed and regular drops
// =========================================================================

#[test]
fn test_slime_always_drops_gel() {
    let mut resolver = builtin_resolver();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..100 {
        resolver.record_kill("slime");
        let drops = resolver.generate_drops("slime", 1, &mut rng);
        let gels = drops.iter().filter(|d| d.template_id == "slimeGel").count();
        assert!(gels >= 1, "every slime kill must drop slime gel");
    }
}

#[test]
fn test_guaranteed_quantity_yields_independent_instances() {
    let mut table = DropTable::new("hoarder");
    table.guaranteed_drops = vec![DropEntry::new("copperRing", 1.0, 3, 3)];
    let mut resolver = resolver_with(vec![table]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    resolver.record_kill("hoarder");
    let drops = resolver.generate_drops("hoarder", 1, &mut rng);
    assert_eq!(drops.len(), 3);

    let ids: HashSet<_> = drops.iter().map(|d| d.id.clone()).collect();
    assert_eq!(ids.len(), 3, "each unit needs its own instance id");
    assert!(drops.iter().all(|d| d.enhance_level == 0));
}

#[test]
fn test_zero_chance_drop_never_appears() {
    let mut table = DropTable::new("stingy");
    table.drops = vec![DropEntry::new("dragonFang", 0.0, 1, 1)];
    let mut resolver = resolver_with(vec![table]);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..200 {
        resolver.record_kill("stingy");
        assert!(resolver.generate_drops("stingy", 99, &mut rng).is_empty());
    }
}

#[test]
fn test_unknown_enemy_drops_nothing() {
    let resolver = builtin_resolver();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert!(resolver.generate_drops("beholder", 50, &mut rng).is_empty());
}

#[test]
fn test_unknown_template_is_skipped() {
    let mut table = DropTable::new("glitch");
    table.guaranteed_drops = vec![
        DropEntry::new("noSuchItem", 1.0, 1, 1),
        DropEntry::new("sandals", 1.0, 1, 1),
    ];
    let mut resolver = resolver_with(vec![table]);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    resolver.record_kill("glitch");
    let drops = resolver.generate_drops("glitch", 1, &mut rng);
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].template_id, "sandals");
}

// =========================================================================
// Level gates
// =========================================================================

#[test]
fn test_level_gate_blocks_everything_below_requirement() {
    let mut table = DropTable::new("warden");
    table.guaranteed_drops = vec![DropEntry::new("ironHelm", 1.0, 1, 1)];
    table.first_kill_drops = vec![DropEntry::new("knightHelm", 1.0, 1, 1)];
    table.level_requirement = Some(10);
    let mut resolver = resolver_with(vec![table]);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    resolver.record_kill("warden");
    assert!(resolver.generate_drops("warden", 5, &mut rng).is_empty());
    assert!(resolver.generate_drops("warden", 9, &mut rng).is_empty());

    let drops = resolver.generate_drops("warden", 10, &mut rng);
    assert_eq!(drops.len(), 2);
}

#[test]
fn test_builtin_dragon_gated_at_twenty() {
    let mut resolver = builtin_resolver();
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    resolver.record_kill("dragon");
    assert!(resolver.generate_drops("dragon", 19, &mut rng).is_empty());
    let drops = resolver.generate_drops("dragon", 20, &mut rng);
    assert!(drops.iter().any(|d| d.template_id == "mithrilSaber"));
    assert!(drops.iter().any(|d| d.template_id == "dragonFang"));
}

// =========================================================================
// First-kill bonuses
// =========================================================================

#[test]
fn test_first_kill_bonus_only_on_first_kill() {
    let mut resolver = builtin_resolver();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    assert_eq!(resolver.record_kill("goblin"), 1);
    assert!(resolver.is_first_kill("goblin"));
    let first = resolver.generate_drops("goblin", 1, &mut rng);
    assert!(first.iter().any(|d| d.template_id == "ironSword"));

    assert_eq!(resolver.record_kill("goblin"), 2);
    assert!(!resolver.is_first_kill("goblin"));
    for _ in 0..50 {
        let later = resolver.generate_drops("goblin", 1, &mut rng);
        assert!(later.iter().all(|d| d.template_id != "ironSword"));
    }
}

#[test]
fn test_no_first_kill_bonus_before_kill_is_recorded() {
    let resolver = builtin_resolver();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    assert!(!resolver.is_first_kill("goblin"));
    let drops = resolver.generate_drops("goblin", 1, &mut rng);
    assert!(drops.iter().all(|d| d.template_id != "ironSword"));
}

// =========================================================================
// Kill history persistence
// =========================================================================

#[test]
fn test_kill_history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Arc::new(Catalog::builtin());

    let mut resolver = DropResolver::with_builtin_tables(
        Arc::clone(&catalog),
        Box::new(FileStorage::new(dir.path())),
    );
    resolver.record_kill("slime");
    resolver.record_kill("slime");
    resolver.record_kill("goblin");

    let reloaded =
        DropResolver::with_builtin_tables(catalog, Box::new(FileStorage::new(dir.path())));
    assert_eq!(reloaded.kill_count("slime"), 2);
    assert_eq!(reloaded.kill_count("goblin"), 1);
    assert!(reloaded.history().has_killed("goblin"));
    assert!(!reloaded.history().has_killed("dragon"));
}

#[test]
fn test_history_uses_camel_case_keys() {
    let mut resolver = builtin_resolver();
    resolver.record_kill("orc");

    let storage = resolver.into_storage();
    let json = storage.get(KILL_HISTORY_KEY).unwrap();
    assert!(json.contains("killedEnemies"));
    assert!(json.contains("enemyKillCounts"));
}

#[test]
fn test_corrupt_history_starts_fresh() {
    let mut storage = MemoryStorage::new();
    storage.set(KILL_HISTORY_KEY, "{ definitely not json").unwrap();

    let mut resolver =
        DropResolver::with_builtin_tables(Arc::new(Catalog::builtin()), Box::new(storage));
    assert_eq!(resolver.kill_count("slime"), 0);
    assert_eq!(resolver.record_kill("slime"), 1);
    assert!(resolver.is_first_kill("slime"));
}
