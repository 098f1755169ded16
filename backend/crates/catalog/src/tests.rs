//! Unit tests for the catalog crate

#[cfg(test)]
mod hierarchy_tests {
    use crate::domain::entities::Category;
    use crate::domain::hierarchy::*;
    use crate::domain::value_objects::CategoryName;
    use uuid::Uuid;

    fn category(name: &str, parent: Option<&Category>) -> Category {
        let ancestry = derive_ancestry(parent).unwrap();
        Category::new(
            CategoryName::new(name).unwrap(),
            parent.map(|p| p.id),
            ancestry,
        )
    }

    #[test]
    fn test_root_derivation() {
        let ancestry = derive_ancestry(None).unwrap();
        assert_eq!(ancestry.level, 1);
        assert!(ancestry.ancestors.is_empty());
    }

    #[test]
    fn test_child_derivation() {
        let root = category("Áo", None);
        let ancestry = derive_ancestry(Some(&root)).unwrap();

        assert_eq!(ancestry.level, 2);
        assert_eq!(ancestry.ancestors, vec![root.id]);
    }

    #[test]
    fn test_grandchild_chain_is_parent_chain_plus_parent() {
        let root = category("Áo", None);
        let child = category("Áo nam", Some(&root));
        let ancestry = derive_ancestry(Some(&child)).unwrap();

        assert_eq!(ancestry.level, 3);
        assert_eq!(ancestry.ancestors, vec![root.id, child.id]);
    }

    #[test]
    fn test_depth_bounded_at_three() {
        // "Áo" → "Áo nam" → "Áo nam sơ mi" builds; a fourth level does not
        let root = category("Áo", None);
        let child = category("Áo nam", Some(&root));
        let grandchild = category("Áo nam sơ mi", Some(&child));

        assert_eq!(grandchild.level, 3);
        assert!(!grandchild.can_have_children());

        let result = derive_ancestry(Some(&grandchild));
        assert_eq!(
            result,
            Err(HierarchyError::DepthExceeded { parent_level: 3 })
        );
    }

    #[test]
    fn test_submitted_empty_ancestors_for_child_rejected() {
        // The exact bug class this core guards against: a child of "Áo"
        // asserting an empty chain must be rejected, not stored
        let root = category("Áo", None);
        let ancestry = derive_ancestry(Some(&root)).unwrap();

        let result = ancestry.verify_submitted(Some(&[]), Some(2));
        assert!(matches!(
            result,
            Err(HierarchyError::AncestorMismatch { expected, submitted })
                if expected == vec![root.id] && submitted.is_empty()
        ));
    }

    #[test]
    fn test_submitted_matching_ancestors_accepted() {
        let root = category("Áo", None);
        let ancestry = derive_ancestry(Some(&root)).unwrap();

        assert!(ancestry.verify_submitted(Some(&[root.id]), Some(2)).is_ok());
        // Absent fields are filled from the derivation, never rejected
        assert!(ancestry.verify_submitted(None, None).is_ok());
    }

    #[test]
    fn test_submitted_level_mismatch_rejected() {
        let root = category("Áo", None);
        let ancestry = derive_ancestry(Some(&root)).unwrap();

        let result = ancestry.verify_submitted(None, Some(3));
        assert_eq!(
            result,
            Err(HierarchyError::LevelMismatch {
                expected: 2,
                submitted: 3
            })
        );
    }

    #[test]
    fn test_reparent_under_self_rejected() {
        let root = category("Áo", None);
        assert_eq!(
            check_reparent(root.id, &root),
            Err(HierarchyError::SelfParent)
        );
    }

    #[test]
    fn test_reparent_under_own_subtree_rejected() {
        let root = category("Áo", None);
        let child = category("Áo nam", Some(&root));

        // Moving the root under its own child would create a cycle
        assert_eq!(
            check_reparent(root.id, &child),
            Err(HierarchyError::CycleDetected)
        );
        // An unrelated node may move under the child
        assert!(check_reparent(Uuid::new_v4(), &child).is_ok());
    }

    #[test]
    fn test_root_entity_invariants() {
        let root = category("Áo", None);
        assert!(root.is_root());
        assert_eq!(root.level, 1);
        assert!(root.ancestors.is_empty());
        assert_eq!(root.ancestors.len() as i16, root.level - 1);
    }

    #[test]
    fn test_child_entity_invariants() {
        let root = category("Áo", None);
        let child = category("Áo nam", Some(&root));

        assert!(!child.is_root());
        assert_eq!(child.parent_id, Some(root.id));
        assert_eq!(child.ancestors.len() as i16, child.level - 1);
        assert!(!child.ancestors.contains(&child.id));
    }
}

#[cfg(test)]
mod category_validation_tests {
    use crate::presentation::dto::CategorySaveRequest;

    fn base_request() -> CategorySaveRequest {
        CategorySaveRequest {
            name: Some("Áo".to_string()),
            parent_id: None,
            ancestors: None,
            level: Some(1),
        }
    }

    #[test]
    fn test_valid_root_request() {
        let input = base_request().validate().unwrap();
        assert_eq!(input.name.as_str(), "Áo");
        assert!(input.parent_id.is_none());
        assert_eq!(input.level, Some(1));
    }

    #[test]
    fn test_short_name_rejected() {
        let request = CategorySaveRequest {
            name: Some("A".to_string()),
            ..base_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["name must be at least 2 characters"]);
    }

    #[test]
    fn test_missing_name_rejected() {
        let request = CategorySaveRequest {
            name: None,
            ..base_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["name is required"]);
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        for level in [0, 4, -1] {
            let request = CategorySaveRequest {
                level: Some(level),
                ..base_request()
            };
            let errors = request.validate().unwrap_err();
            assert_eq!(errors, vec!["level must be an integer between 1 and 3"]);
        }
    }

    #[test]
    fn test_invalid_parent_id_rejected() {
        let request = CategorySaveRequest {
            parent_id: Some("not-a-uuid".to_string()),
            ..base_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["parentId must be a valid id or null"]);
    }

    #[test]
    fn test_invalid_ancestor_id_rejected() {
        let request = CategorySaveRequest {
            ancestors: Some(vec!["garbage".to_string()]),
            ..base_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["each id in ancestors must be a valid id"]);
    }

    #[test]
    fn test_all_field_errors_collected() {
        let request = CategorySaveRequest {
            name: Some("A".to_string()),
            parent_id: Some("bad".to_string()),
            ancestors: Some(vec!["bad".to_string()]),
            level: Some(9),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}

#[cfg(test)]
mod product_validation_tests {
    use crate::presentation::dto::{
        ColorVariantRequest, ProductImagesRequest, ProductSaveRequest, SizeStockRequest,
    };
    use uuid::Uuid;

    fn base_request() -> ProductSaveRequest {
        ProductSaveRequest {
            name: Some("Áo sơ mi trắng".to_string()),
            price: Some(299000.0),
            sku: Some("AO-SM-001".to_string()),
            category_id: Some(Uuid::new_v4().to_string()),
            category_ancestors: None,
            colors: Some(vec![ColorVariantRequest {
                base_color: Some("white".to_string()),
                actual_color: Some("#ffffff".to_string()),
                color_name: Some("Trắng".to_string()),
            }]),
            images: Some(ProductImagesRequest {
                main: Some("https://img.example/main.jpg".to_string()),
                hover: Some("https://img.example/hover.jpg".to_string()),
                product: vec![],
            }),
            short_description: None,
            description: None,
            sizes: Some(vec![SizeStockRequest {
                size: Some("M".to_string()),
                stock: Some(12),
            }]),
        }
    }

    #[test]
    fn test_valid_request() {
        let input = base_request().validate().unwrap();
        assert_eq!(input.draft.sku, "AO-SM-001");
        assert_eq!(input.draft.colors.len(), 1);
        assert_eq!(input.draft.sizes.len(), 1);
    }

    #[test]
    fn test_negative_price_rejected() {
        let request = ProductSaveRequest {
            price: Some(-1.0),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["price must be greater than or equal to 0"]);
    }

    #[test]
    fn test_missing_sku_rejected() {
        let request = ProductSaveRequest {
            sku: Some("   ".to_string()),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["sku is required"]);
    }

    #[test]
    fn test_invalid_category_id_rejected() {
        let request = ProductSaveRequest {
            category_id: Some("not-an-id".to_string()),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["categoryId must be a valid id"]);
    }

    #[test]
    fn test_empty_colors_rejected() {
        let request = ProductSaveRequest {
            colors: Some(vec![]),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("color"));
    }

    #[test]
    fn test_unknown_size_code_rejected() {
        let request = ProductSaveRequest {
            sizes: Some(vec![SizeStockRequest {
                size: Some("XS".to_string()),
                stock: Some(3),
            }]),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("size"));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let request = ProductSaveRequest {
            sizes: Some(vec![SizeStockRequest {
                size: Some("L".to_string()),
                stock: Some(-1),
            }]),
            ..base_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_hover_image_rejected() {
        let request = ProductSaveRequest {
            images: Some(ProductImagesRequest {
                main: Some("https://img.example/main.jpg".to_string()),
                hover: None,
                product: vec![],
            }),
            ..base_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["main and hover images are required"]);
    }
}

#[cfg(test)]
mod pagination_tests {
    use crate::domain::repository::Page;
    use crate::domain::value_objects::{MAX_PAGE_SIZE, PageParams};
    use crate::presentation::dto::ListCategoriesQuery;

    #[test]
    fn test_page_params_clamping() {
        let params = PageParams::new(0, 0);
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);

        let params = PageParams::new(-5, 1000);
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_params_offset() {
        let params = PageParams::new(3, 10);
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PageParams::new(1, 10);

        let page = Page::new(vec![1, 2, 3], 21, &params);
        assert_eq!(page.total_pages, 3);

        let page: Page<i32> = Page::new(vec![], 0, &params);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_query_defaults() {
        let query = ListCategoriesQuery::default();
        let (filter, params, sort) = query.into_parts().unwrap();

        assert!(filter.level1.is_none());
        assert!(filter.level2.is_none());
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(sort.field, "createdAt");
    }

    #[test]
    fn test_query_garbage_numbers_fall_back() {
        let query = ListCategoriesQuery {
            page: Some("abc".to_string()),
            limit: Some("-".to_string()),
            ..Default::default()
        };
        let (_, params, _) = query.into_parts().unwrap();

        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_query_invalid_branch_filter_rejected() {
        let query = ListCategoriesQuery {
            level1: Some("not-an-id".to_string()),
            ..Default::default()
        };
        let errors = query.into_parts().unwrap_err();
        assert_eq!(errors, vec!["level1 must be a valid id"]);
    }

    #[test]
    fn test_query_branch_filters_parsed() {
        let id = uuid::Uuid::new_v4();
        let query = ListCategoriesQuery {
            level1: Some(id.to_string()),
            order: Some("desc".to_string()),
            sort: Some("name".to_string()),
            ..Default::default()
        };
        let (filter, _, sort) = query.into_parts().unwrap();

        assert_eq!(filter.level1, Some(id));
        assert_eq!(sort.field, "name");
        assert_eq!(sort.order, crate::domain::value_objects::SortOrder::Desc);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entities::Category;
    use crate::domain::hierarchy::derive_ancestry;
    use crate::domain::value_objects::{CategoryName, SizeCode};
    use crate::presentation::dto::{CategoryResponse, CategorySaveRequest};

    #[test]
    fn test_category_response_serialization() {
        let category = Category::new(
            CategoryName::new("Áo").unwrap(),
            None,
            derive_ancestry(None).unwrap(),
        );
        let response = CategoryResponse::from(category);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"parentId\":null"));
        assert!(json.contains("\"ancestors\":[]"));
        assert!(json.contains("\"level\":1"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
    }

    #[test]
    fn test_save_request_deserialization() {
        let json = r#"{"name":"Áo nam","parentId":"00000000-0000-0000-0000-000000000000","ancestors":[],"level":2}"#;
        let request: CategorySaveRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name.as_deref(), Some("Áo nam"));
        assert_eq!(
            request.parent_id.as_deref(),
            Some("00000000-0000-0000-0000-000000000000")
        );
        assert_eq!(request.ancestors.as_deref(), Some(&[][..]));
        assert_eq!(request.level, Some(2));
    }

    #[test]
    fn test_save_request_null_parent() {
        let json = r#"{"name":"Áo","parentId":null,"level":1}"#;
        let request: CategorySaveRequest = serde_json::from_str(json).unwrap();
        assert!(request.parent_id.is_none());
    }

    #[test]
    fn test_size_code_wire_values() {
        assert_eq!(SizeCode::parse("XL"), Some(SizeCode::XL));
        assert_eq!(SizeCode::parse("xl"), None);
        assert_eq!(serde_json::to_string(&SizeCode::XXL).unwrap(), "\"XXL\"");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::hierarchy::HierarchyError;
    use crate::error::CatalogError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let cases: Vec<(CatalogError, StatusCode)> = vec![
            (
                CatalogError::Validation(vec!["bad".into()]),
                StatusCode::BAD_REQUEST,
            ),
            (CatalogError::ParentNotFound, StatusCode::NOT_FOUND),
            (CatalogError::CategoryNotFound, StatusCode::NOT_FOUND),
            (CatalogError::ProductNotFound, StatusCode::NOT_FOUND),
            (
                CatalogError::Inconsistent("drift".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CatalogError::HasChildren, StatusCode::CONFLICT),
            (CatalogError::InUseByProducts, StatusCode::CONFLICT),
            (
                CatalogError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_depth_overflow_maps_to_validation() {
        let err: CatalogError = HierarchyError::DepthExceeded { parent_level: 3 }.into();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ancestor_mismatch_maps_to_inconsistent() {
        let err: CatalogError = HierarchyError::AncestorMismatch {
            expected: vec![],
            submitted: vec![],
        }
        .into();
        assert!(matches!(err, CatalogError::Inconsistent(_)));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_cycle_maps_to_validation() {
        let err: CatalogError = HierarchyError::CycleDetected.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
