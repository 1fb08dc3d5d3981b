// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end walk through the public form API, the way the shell drives it.

use courier::form::{Controller, FormScreen, Key, Region, INTRO_BANNER, SUBMIT_BANNER};
use courier::store::Manifest;

fn started_form() -> (Controller, FormScreen) {
    let manifest = Manifest::demo();
    let document = manifest.document_lines().expect("demo document");
    let mut screen = FormScreen::new(
        manifest.platforms,
        manifest.transcripts,
        manifest.destinations,
        document,
    );
    let mut controller = Controller::new();
    controller.start(&mut screen).expect("start form");
    (controller, screen)
}

fn press(controller: &mut Controller, screen: &mut FormScreen, key: Key) {
    let focus = controller.focus();
    controller.handle(screen, focus, key).expect("handle key");
}

#[test]
fn the_demo_session_submits_and_confirms() {
    let (mut controller, mut screen) = started_form();
    assert_eq!(screen.banner(), INTRO_BANNER);
    assert_eq!(screen.current_region(), Region::Platforms);

    // Pick " CERT ", " sfu01.xml " and " Simon Fraser University ".
    press(&mut controller, &mut screen, Key::Down);
    press(&mut controller, &mut screen, Key::Tab);
    press(&mut controller, &mut screen, Key::Down);
    press(&mut controller, &mut screen, Key::Down);
    press(&mut controller, &mut screen, Key::Tab);
    press(&mut controller, &mut screen, Key::Down);
    press(&mut controller, &mut screen, Key::Down);
    press(&mut controller, &mut screen, Key::Right);

    assert_eq!(screen.current_region(), Region::Submit);
    assert_eq!(screen.banner(), SUBMIT_BANNER);

    press(&mut controller, &mut screen, Key::Enter);
    assert_eq!(
        screen.message().as_deref(),
        Some("Submitted  CERT ,  sfu01.xml ,  Simon Fraser University ")
    );

    // Dismissal lands back on Platforms with the instructional banner.
    press(&mut controller, &mut screen, Key::Enter);
    assert_eq!(screen.current_region(), Region::Platforms);
    assert_eq!(screen.banner(), INTRO_BANNER);
    assert_eq!(screen.message(), None);

    // Selections survive the round trip and show up again on resubmit.
    press(&mut controller, &mut screen, Key::PageDown);
    controller
        .handle(&mut screen, Region::Submit, Key::Enter)
        .expect("resubmit");
    assert_eq!(
        screen.message().as_deref(),
        Some("Submitted  CERT ,  sfu01.xml ,  Simon Fraser University ")
    );
}

#[test]
fn focus_keeps_cycling_across_many_advances() {
    let (mut controller, mut screen) = started_form();
    for round in 0..4 {
        for expected in [
            Region::Transcripts,
            Region::Destinations,
            Region::Submit,
            Region::Text,
            Region::Platforms,
        ] {
            press(&mut controller, &mut screen, Key::Tab);
            assert_eq!(controller.focus(), expected, "round {round}");
        }
    }
}

#[test]
fn quitting_with_the_overlay_open_leaves_no_dangling_state() {
    let (mut controller, mut screen) = started_form();
    for _ in 0..3 {
        press(&mut controller, &mut screen, Key::Tab);
    }
    press(&mut controller, &mut screen, Key::Enter);
    assert!(controller.overlay().is_open());

    // The quit sentinel fires from the overlay; teardown happens at process
    // exit, so the overlay may simply still be open here.
    let focus = controller.focus();
    let quit = controller.handle(&mut screen, focus, Key::CtrlC);
    assert!(quit.is_err());
}
