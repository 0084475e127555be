//! XML entity abstraction

use crate::error::ValidationError;

/// Read access to a launch element's tag and attributes
pub trait Entity {
    /// Get entity type name (e.g., "node_container", "composable_node")
    fn type_name(&self) -> &str;

    /// Get attribute value, if present
    fn attr(&self, name: &str) -> Option<&str>;

    /// Get a required attribute value
    fn required_attr(&self, name: &str) -> Result<&str, ValidationError> {
        self.attr(name)
            .ok_or_else(|| ValidationError::MissingAttribute {
                element: self.type_name().to_string(),
                attribute: name.to_string(),
            })
    }

    /// Fail unless the entity carries the expected tag
    fn expect_type(&self, parent: &str, expected: &str) -> Result<(), ValidationError> {
        if self.type_name() == expected {
            Ok(())
        } else {
            Err(ValidationError::UnexpectedElement {
                parent: parent.to_string(),
                child: self.type_name().to_string(),
            })
        }
    }
}

/// XML entity implementation wrapping roxmltree::Node
#[derive(Debug, Clone, Copy)]
pub struct XmlEntity<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> XmlEntity<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Return an iterator over child elements, skipping text and comments
    pub fn children(&self) -> impl Iterator<Item = XmlEntity<'a, 'input>> {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(XmlEntity::new)
    }
}

impl<'a, 'input> Entity for XmlEntity<'a, 'input> {
    fn type_name(&self) -> &str {
        self.node.tag_name().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.node.attribute(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_skip_comments_and_text() {
        let xml = r#"<launch>
            <!-- sensors -->
            <node_container pkg="rclcpp_components" exec="component_container" />
            text
            <arg name="foo" default="bar" />
        </launch>"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let root = XmlEntity::new(doc.root_element());
        assert_eq!(root.type_name(), "launch");

        let children: Vec<_> = root.children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].type_name(), "node_container");
        assert_eq!(children[1].type_name(), "arg");
    }

    #[test]
    fn test_required_attribute() {
        let xml = r#"<composable_node pkg="lidar_driver" plugin="lidar_driver::LidarNode" />"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let node = XmlEntity::new(doc.root_element());
        assert_eq!(node.required_attr("pkg").unwrap(), "lidar_driver");

        let err = node.required_attr("name").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingAttribute {
                element: "composable_node".to_string(),
                attribute: "name".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_attribute() {
        let xml = r#"<composable_node pkg="demo" name="n" plugin="demo::Node" />"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let node = XmlEntity::new(doc.root_element());
        assert!(node.attr("namespace").is_none());
    }

    #[test]
    fn test_expect_type() {
        let xml = r#"<node_container><param name="a" value="1" /></node_container>"#;

        let doc = roxmltree::Document::parse(xml).unwrap();
        let container = XmlEntity::new(doc.root_element());
        let param = container.children().next().unwrap();

        assert!(container
            .expect_type("launch", "node_container")
            .is_ok());
        assert_eq!(
            param.expect_type("node_container", "composable_node"),
            Err(ValidationError::UnexpectedElement {
                parent: "node_container".to_string(),
                child: "param".to_string(),
            })
        );
    }
}
