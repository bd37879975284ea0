// SPDX-License-Identifier: MPL-2.0
use iced_folio::domain::portfolio::{ImageDescriptor, ImageId, Order};
use iced_folio::gallery::Gallery;
use iced_folio::navigation::{
    Effect, GridNavigation, LayoutClass, Message, NavigationController, NavigationKey,
};

fn abc() -> Gallery {
    Gallery::from_descriptors(vec![
        ImageDescriptor::new("a", 0, "A"),
        ImageDescriptor::new("b", 1, "B"),
        ImageDescriptor::new("c", 2, "C"),
    ])
    .expect("valid gallery")
}

fn controller(gallery: &Gallery, id: &str) -> NavigationController {
    NavigationController::new(gallery.clone(), &ImageId::from(id)).expect("id in gallery")
}

fn current(controller: &NavigationController) -> &str {
    controller.current_id().as_str()
}

#[test]
fn three_item_walkthrough() {
    let gallery = abc();
    let mut b = controller(&gallery, "b");

    b.open(LayoutClass::Regular);
    b.move_forward();
    assert_eq!(current(&b), "c");

    assert_eq!(b.move_forward(), Effect::None);
    assert_eq!(current(&b), "c");

    b.move_backward();
    b.move_backward();
    assert_eq!(current(&b), "a");
    assert_eq!(b.current_description(), "A");

    assert_eq!(b.close(), Effect::Hide);
    let reopened = b.open(LayoutClass::Regular);
    assert_eq!(
        reopened,
        Effect::Show {
            id: ImageId::from("b"),
            description: "B".into(),
        }
    );
}

#[test]
fn single_item_moves_are_noops() {
    let gallery = Gallery::from_descriptors(vec![ImageDescriptor::new("x", 0, "")])
        .expect("valid gallery");
    let mut x = controller(&gallery, "x");
    x.open(LayoutClass::Regular);
    let before = x.state().clone();

    assert_eq!(x.move_forward(), Effect::None);
    assert_eq!(x.move_backward(), Effect::None);
    assert_eq!(x.state(), &before);

    let info = x.info();
    assert!(!info.can_move_forward);
    assert!(!info.can_move_backward);
}

#[test]
fn close_after_any_walk_restores_initial_state() {
    let gallery = abc();
    let walks: [&[Message]; 4] = [
        &[],
        &[Message::MoveForward],
        &[Message::MoveBackward, Message::MoveBackward, Message::MoveForward],
        &[
            Message::MoveForward,
            Message::MoveForward,
            Message::MoveForward,
            Message::MoveBackward,
        ],
    ];

    for start in ["a", "b", "c"] {
        for walk in walks {
            let mut ctrl = controller(&gallery, start);
            let initial = ctrl.state().clone();

            ctrl.open(LayoutClass::Regular);
            for message in walk {
                ctrl.handle(*message);
            }
            ctrl.close();

            assert_eq!(ctrl.state(), &initial, "start {start}, walk {walk:?}");
        }
    }
}

#[test]
fn keys_match_pointer_moves() {
    let gallery = abc();

    for start in ["a", "b", "c"] {
        for (key, pointer) in [
            (NavigationKey::Left, Message::MoveBackward),
            (NavigationKey::Right, Message::MoveForward),
        ] {
            let mut by_key = controller(&gallery, start);
            let mut by_pointer = controller(&gallery, start);
            by_key.open(LayoutClass::Regular);
            by_pointer.open(LayoutClass::Regular);

            let key_effect = by_key.handle(Message::Key(key));
            let pointer_effect = by_pointer.handle(pointer);

            assert_eq!(key_effect, pointer_effect);
            assert_eq!(by_key.state(), by_pointer.state());
        }
    }
}

#[test]
fn position_round_trips_for_every_order() {
    let gallery = abc();
    for value in 0..3 {
        let order = Order::new(value);
        let descriptor = gallery.at_position(order).expect("order in range");
        assert_eq!(gallery.position(descriptor.id()), Ok(order));
    }
    assert!(gallery.at_position(Order::new(3)).is_err());
}

#[test]
fn sparse_orders_are_walked_in_order() {
    let gallery = Gallery::from_descriptors(vec![
        ImageDescriptor::new("late", 40, ""),
        ImageDescriptor::new("early", 3, ""),
        ImageDescriptor::new("middle", 17, ""),
    ])
    .expect("valid gallery");
    let mut ctrl = controller(&gallery, "early");
    ctrl.open(LayoutClass::Regular);

    ctrl.move_forward();
    assert_eq!(current(&ctrl), "middle");
    ctrl.move_forward();
    assert_eq!(current(&ctrl), "late");
    assert!(ctrl.is_at_last());
}

#[test]
fn grid_items_keep_independent_state() {
    let gallery = abc();
    let mut grid = GridNavigation::from_gallery(&gallery);

    grid.open(0, LayoutClass::Regular);
    grid.handle_key(NavigationKey::Right);
    assert_eq!(grid.open_index(), Some(0));

    // a second overlay cannot be opened on top of the first
    assert_eq!(grid.open(2, LayoutClass::Regular), Effect::None);

    grid.handle_key(NavigationKey::Escape);
    assert!(grid.open_index().is_none());
    let currents: Vec<&str> = grid.iter().map(current).collect();
    assert_eq!(currents, ["a", "b", "c"]);
}

#[test]
fn compact_layout_never_opens() {
    let gallery = abc();
    let mut grid = GridNavigation::from_gallery(&gallery);
    let layout = LayoutClass::from_width(480.0, 600.0);

    assert_eq!(grid.open(1, layout), Effect::None);
    assert!(grid.open_index().is_none());
}
