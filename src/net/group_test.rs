use super::*;

fn frame(group: &GroupHub, from: &str, syscall: &str) -> Frame {
    Frame::new(syscall, group.group_id(), Some(from), serde_json::json!({ "flag": true, "time": 0 }))
}

#[test]
fn send_reaches_every_other_member_but_not_sender() {
    let hub = GroupHub::new(Uuid::new_v4());
    let mut a = hub.join().expect("join a");
    let mut b = hub.join().expect("join b");
    let mut c = hub.join().expect("join c");

    let sent = frame(&hub, a.peer_id(), "session:restart");
    a.send(&sent).expect("send");

    assert!(a.poll().is_empty());
    assert_eq!(b.poll(), vec![sent.clone()]);
    assert_eq!(c.poll(), vec![sent]);
    assert!(b.poll().is_empty());
}

#[test]
fn poll_preserves_arrival_order() {
    let hub = GroupHub::new(Uuid::new_v4());
    let a = hub.join().expect("join a");
    let mut b = hub.join().expect("join b");

    let first = frame(&hub, a.peer_id(), "session:first");
    let second = frame(&hub, a.peer_id(), "session:second");
    a.send(&first).expect("send first");
    a.send(&second).expect("send second");

    let syscalls: Vec<String> = b.poll().into_iter().map(|f| f.syscall).collect();
    assert_eq!(syscalls, vec!["session:first", "session:second"]);
}

#[test]
fn leave_removes_member_and_rejects_later_sends() {
    let hub = GroupHub::new(Uuid::new_v4());
    let a = hub.join().expect("join a");
    let b = hub.join().expect("join b");
    assert_eq!(hub.member_count(), 2);

    let a_id = a.peer_id().to_owned();
    b.leave();
    assert_eq!(hub.member_count(), 1);

    let orphan = hub.clone();
    drop(a);
    assert_eq!(orphan.member_count(), 0);
    let err = orphan.broadcast(&a_id, &frame(&orphan, &a_id, "session:restart")).expect_err("not joined");
    assert!(matches!(err, TransportError::NotJoined(id) if id == a_id));
}

#[test]
fn undecodable_bytes_are_skipped() {
    let hub = GroupHub::new(Uuid::new_v4());
    let a = hub.join().expect("join a");
    let mut b = hub.join().expect("join b");

    {
        let members = hub.members.lock().expect("lock");
        let tx = members.get(b.peer_id()).expect("member b");
        tx.send(vec![0xff, 0x00, 0x01]).expect("raw send");
    }
    let good = frame(&hub, a.peer_id(), "session:restart");
    a.send(&good).expect("send");

    assert_eq!(b.poll(), vec![good]);
}

#[test]
fn transport_reports_group_and_peer() {
    let hub = GroupHub::new(Uuid::nil());
    let a = hub.join().expect("join");
    assert_eq!(a.group_id(), "00000000-0000-0000-0000-000000000000");
    assert!(Uuid::parse_str(a.peer_id()).is_ok());
}
