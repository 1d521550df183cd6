use super::*;

#[test]
fn recorder_tags_commands_with_current_feature() {
    let mut list = DrawList::new();
    list.begin_feature(FaceFeature::Head);
    list.stroke_oval(0, 0, 10, 10);
    list.begin_feature(FaceFeature::Nose);
    list.line(1, 2, 3, 4);
    list.line(3, 4, 5, 6);

    assert_eq!(list.len(), 3);
    assert_eq!(list.items[0].feature, FaceFeature::Head);
    assert_eq!(list.feature_commands(FaceFeature::Nose).len(), 2);
    assert!(list.feature_commands(FaceFeature::Mouth).is_empty());
}

#[test]
fn replay_reproduces_the_same_list() {
    let mut list = DrawList::new();
    list.begin_feature(FaceFeature::Eyes);
    list.stroke_oval(5, 5, 4, 6);
    list.begin_feature(FaceFeature::Pupils);
    list.fill_oval(6, 6, 2, 2);

    let mut copy = DrawList::new();
    list.replay(&mut copy);
    assert_eq!(copy, list);
}

#[test]
fn json_shape_is_flat_and_tagged() {
    let mut list = DrawList::new();
    list.begin_feature(FaceFeature::Eyebrows);
    list.line(70, 60, 90, 60);

    let v = serde_json::to_value(&list).unwrap();
    let item = &v["items"][0];
    assert_eq!(item["feature"], "eyebrows");
    assert_eq!(item["op"], "line");
    assert_eq!(item["x2"], 90);

    let back: DrawList = serde_json::from_value(v).unwrap();
    assert_eq!(back, list);
}

#[test]
fn apply_dispatches_every_variant() {
    let mut list = DrawList::new();
    let cmds = [
        DrawCommand::StrokeOval {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        },
        DrawCommand::FillOval {
            x: 5,
            y: 6,
            width: 7,
            height: 8,
        },
        DrawCommand::Line {
            x1: 0,
            y1: 0,
            x2: 9,
            y2: 9,
        },
    ];
    for cmd in cmds {
        list.apply(cmd);
    }
    assert_eq!(list.commands().collect::<Vec<_>>(), cmds);
}
