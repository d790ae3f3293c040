use criterion::{criterion_group, criterion_main, Criterion};
use snake_engine::game::{Cell, Direction, EngineSettings, SessionController, TargetPlacer, Grid, SessionRng};
use std::collections::HashSet;

fn bench_ticks_until_wall(c: &mut Criterion) {
    c.bench_function("session_40x40_ticks_until_wall", |b| {
        b.iter(|| {
            let mut controller = SessionController::new(EngineSettings::default(), 42).unwrap();
            controller.start("bench");
            let mut ticks = 0;
            while controller.is_running() {
                controller.tick();
                ticks += 1;
            }
            ticks
        });
    });
}

fn bench_zigzag_session(c: &mut Criterion) {
    c.bench_function("session_40x40_zigzag", |b| {
        b.iter(|| {
            let mut controller = SessionController::new(EngineSettings::default(), 7).unwrap();
            controller.start("bench");
            let mut turn = 0;
            while controller.is_running() {
                let head = controller.snake().head();
                let direction = controller.snake().direction();
                if (direction == Direction::Right && head.x == 38) || (direction == Direction::Left && head.x == 1) {
                    controller.set_direction(Direction::Down);
                    turn = 1;
                } else if turn == 1 {
                    controller.set_direction(if head.x >= 38 { Direction::Left } else { Direction::Right });
                    turn = 0;
                }
                controller.tick();
            }
        });
    });
}

fn bench_placement_on_crowded_grid(c: &mut Criterion) {
    let grid = Grid::new(40, 40);
    let occupied: HashSet<Cell> = grid.cells().filter(|cell| cell.y < 38).collect();

    c.bench_function("target_placement_95_percent_full", |b| {
        let mut rng = SessionRng::new(11);
        b.iter(|| TargetPlacer::place(&grid, &occupied, &mut rng));
    });
}

criterion_group!(
    benches,
    bench_ticks_until_wall,
    bench_zigzag_session,
    bench_placement_on_crowded_grid
);
criterion_main!(benches);
