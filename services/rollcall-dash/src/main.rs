// services/rollcall-dash/src/main.rs
//
// Roll Call Dashboard - Attendee interaction summary viewer
// Build with: trunk serve services/rollcall-dash/index.html
//

fn main() {
    rollcall_dash::mount();
}
