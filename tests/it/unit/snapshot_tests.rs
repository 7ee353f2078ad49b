//! Snapshot tests using the insta crate.
//!
//! Action payloads are what a host's listener sees, so their JSON shape is
//! pinned here with inline snapshots.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use gridlink::{Action, EditorConfig, GraphModel, RecordingScene};

fn graph_with_link() -> (GraphModel, RecordingScene) {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let a = graph.add_point(5, 5, &mut scene).unwrap().key;
    let b = graph.add_point(7, 1, &mut scene).unwrap().key;
    graph.add_link(a, b, &mut scene).unwrap();
    (graph, scene)
}

#[test]
fn snapshot_add_point() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let point = graph.add_point(5, 5, &mut scene).unwrap().clone();

    insta::assert_json_snapshot!(Action::AddPoint(point), @r###"
    {
      "type": "ADD_POINT",
      "payload": {
        "id": 0,
        "x": 5,
        "y": 5,
        "key": 110,
        "links": []
      }
    }
    "###);
}

#[test]
fn snapshot_add_link() {
    let (graph, _scene) = graph_with_link();
    let action = Action::AddLink {
        start: graph.point(110).unwrap().clone(),
        end: graph.point(148).unwrap().clone(),
    };

    insta::assert_json_snapshot!(action, @r###"
    {
      "type": "ADD_LINK",
      "payload": {
        "start": {
          "id": 0,
          "x": 5,
          "y": 5,
          "key": 110,
          "links": [
            0
          ]
        },
        "end": {
          "id": 1,
          "x": 7,
          "y": 1,
          "key": 148,
          "links": [
            0
          ]
        }
      }
    }
    "###);
}

#[test]
fn snapshot_remove_link() {
    let (graph, _scene) = graph_with_link();
    let link = graph.links()[0].clone();

    insta::assert_json_snapshot!(Action::RemoveLink(link), @r###"
    {
      "type": "REMOVE_LINK",
      "payload": {
        "id": 0,
        "start": 0,
        "end": 1
      }
    }
    "###);
}

#[test]
fn snapshot_default_config() {
    insta::assert_json_snapshot!(EditorConfig::default(), @r###"
    {
      "size": 21,
      "keys": {
        "grab": " ",
        "zoomIn": "=",
        "zoomInPrecise": "+",
        "zoomOut": "-",
        "zoomOutPrecise": "_",
        "unselect": "Escape"
      }
    }
    "###);
}
