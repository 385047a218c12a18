use particle_field_background::{
    Animator, AnimatorState, Color, FieldConfig, Particle, ParticleField, RandSource,
    RecordingSurface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn mount_then_bounce_off_the_right_edge() {
    let mut animator = Animator::new(FieldConfig::default());
    let mut rng = RandSource(StdRng::seed_from_u64(2024));
    let state = animator.start(Some(RecordingSurface::default()), 800, 600, &mut rng);
    assert_eq!(state, AnimatorState::Running);

    let field = animator.field().unwrap();
    assert_eq!(field.particles().len(), 50);
    for p in field.particles() {
        assert!(p.radius() >= 1.0 && p.radius() < 6.0);
        assert!(p.opacity() >= 0.1 && p.opacity() < 0.6);
        assert!(p.pos()[0] >= 0.0 && p.pos()[0] <= 800.0);
        assert!(p.pos()[1] >= 0.0 && p.pos()[1] <= 600.0);
    }

    let edge = Particle::new([799.0, 300.0], [0.4, 0.0], 2.0, Color::ORANGE, 0.5);
    let mut field = ParticleField::with_particles(FieldConfig::default(), 800.0, 600.0, vec![edge]);
    let mut surface = RecordingSurface::new(800, 600);

    // 799.4 and 799.8 are still inside
    for _ in 0..2 {
        field.frame(&mut surface);
        assert_eq!(field.particles()[0].vel(), [0.4, 0.0]);
        assert!(field.particles()[0].pos()[0] <= 800.0);
    }

    field.frame(&mut surface);
    assert!(field.particles()[0].pos()[0] > 800.0);
    assert_eq!(field.particles()[0].vel(), [-0.4, 0.0]);

    // and it heads back in
    field.frame(&mut surface);
    assert!(field.particles()[0].pos()[0] < 800.0);
    assert_eq!(field.particles()[0].vel(), [-0.4, 0.0]);
}

#[test]
fn teardown_stops_drawing() {
    let mut animator = Animator::new(FieldConfig::default());
    let mut rng = RandSource(StdRng::seed_from_u64(9));
    animator.start(Some(RecordingSurface::default()), 1280, 720, &mut rng);

    let mut ticks = 0;
    while animator.tick() {
        ticks += 1;
        if ticks == 30 {
            animator.stop();
        }
    }
    assert_eq!(ticks, 30);
    assert_eq!(animator.frames(), 30);
    assert_eq!(animator.state(), AnimatorState::Stopped);
}

#[test]
fn every_frame_draws_one_circle_per_particle() {
    let mut animator = Animator::new(FieldConfig::default());
    let mut rng = RandSource(StdRng::seed_from_u64(11));
    animator.start(Some(RecordingSurface::default()), 800, 600, &mut rng);
    for _ in 0..5 {
        animator.tick();
    }
    let surface = animator.stop().unwrap();
    assert_eq!(surface.circles().count(), 5 * 50);
}
