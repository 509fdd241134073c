/*!
    Pure render functions: describe the nodes a component needs.
*/

use crate::dom::{Node, Role};

/// Container class while the placeholder is shown.
pub(crate) const PLACEHOLDER_CLASS: &str = "n-video--placeholder";
/// Container class once the video element is mounted.
pub(crate) const PLAYER_CLASS: &str = "n-video--player";

/**
    The native video element: controls on, poster, source and the configured
    classes.
*/
pub fn video_node(poster: Option<&str>, src: &str, classes: &[String]) -> Node {
    let mut node = Node::new("video")
        .role(Role::Video)
        .classes(classes.iter().cloned())
        .attr("controls", "true");
    if let Some(poster) = poster {
        node = node.attr("poster", poster);
    }
    node.attr("src", src)
}

/**
    Placeholder nodes in container order: the poster image, then the title
    when `title` is given, then the play button when requested.
*/
pub fn placeholder_nodes(
    poster: Option<&str>,
    classes: &[String],
    title: Option<&str>,
    play_button: bool,
) -> Vec<Node> {
    let mut image = Node::new("img")
        .role(Role::Placeholder)
        .classes(classes.iter().cloned());
    if let Some(poster) = poster {
        image = image.attr("src", poster);
    }

    let mut nodes = vec![image];

    if let Some(title) = title {
        nodes.push(
            Node::new("div")
                .role(Role::Title)
                .class("n-video__title")
                .text(title),
        );
    }

    if play_button {
        nodes.push(
            Node::new("button")
                .role(Role::PlayButton)
                .class("n-video__play-button")
                .attr("data-trackable", "play button")
                .child(
                    Node::new("dd")
                        .class("n-video__play-button-text")
                        .text("Play video"),
                )
                .child(Node::new("i").class("n-video__play-button-icon")),
        );
    }

    nodes
}
