//! Identifier case normalization
//!
//! Folds the case of every unquoted identifier the walker can reach:
//! relation names, column references, table and CTE aliases with their
//! column lists, select-item aliases, qualified wildcards and `USING` join
//! columns. Quoted identifiers are left verbatim.

use std::ops::ControlFlow;

use sqlparser::ast::{
    Expr, Ident, Join, JoinConstraint, JoinOperator, ObjectName, ObjectNamePart, Query,
    SelectItem, SelectItemQualifiedWildcardKind, SetExpr, Statement, TableAlias, TableFactor,
    VisitMut, VisitorMut,
};

/// Case that unquoted identifiers fold to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierCase {
    /// Fold to lowercase (Spark, Hive, DuckDB)
    #[default]
    Lower,
    /// Fold to uppercase (Snowflake)
    Upper,
}

impl IdentifierCase {
    fn fold(self, ident: &mut Ident) {
        if ident.quote_style.is_some() {
            return;
        }
        ident.value = match self {
            IdentifierCase::Lower => ident.value.to_lowercase(),
            IdentifierCase::Upper => ident.value.to_uppercase(),
        };
    }

    fn fold_object_name(self, name: &mut ObjectName) {
        for part in &mut name.0 {
            if let ObjectNamePart::Identifier(ident) = part {
                self.fold(ident);
            }
        }
    }

    fn fold_alias(self, alias: &mut TableAlias) {
        self.fold(&mut alias.name);
        for column in &mut alias.columns {
            self.fold(&mut column.name);
        }
    }

    fn fold_joins(self, joins: &mut [Join]) {
        for join in joins {
            if let Some(JoinConstraint::Using(columns)) = join_constraint(&mut join.join_operator)
            {
                for column in columns {
                    self.fold_object_name(column);
                }
            }
        }
    }
}

fn join_constraint(operator: &mut JoinOperator) -> Option<&mut JoinConstraint> {
    match operator {
        JoinOperator::Join(constraint)
        | JoinOperator::Inner(constraint)
        | JoinOperator::Left(constraint)
        | JoinOperator::LeftOuter(constraint)
        | JoinOperator::Right(constraint)
        | JoinOperator::RightOuter(constraint)
        | JoinOperator::FullOuter(constraint) => Some(constraint),
        _ => None,
    }
}

/// Fold the case of unquoted identifiers in `statement`
pub fn normalize_identifiers(statement: &mut Statement, case: IdentifierCase) {
    let mut visitor = IdentifierNormalizer { case };
    let _ = VisitMut::visit(statement, &mut visitor);
}

struct IdentifierNormalizer {
    case: IdentifierCase,
}

impl IdentifierNormalizer {
    fn normalize_set_expr(&self, body: &mut SetExpr) {
        match body {
            SetExpr::Select(select) => {
                for table in &mut select.from {
                    self.case.fold_joins(&mut table.joins);
                }
                for item in &mut select.projection {
                    match item {
                        SelectItem::ExprWithAlias { alias, .. } => self.case.fold(alias),
                        SelectItem::QualifiedWildcard(
                            SelectItemQualifiedWildcardKind::ObjectName(name),
                            _,
                        ) => self.case.fold_object_name(name),
                        _ => {}
                    }
                }
            }
            SetExpr::SetOperation { left, right, .. } => {
                self.normalize_set_expr(left);
                self.normalize_set_expr(right);
            }
            // Nested queries are reached through pre_visit_query
            _ => {}
        }
    }
}

impl VisitorMut for IdentifierNormalizer {
    type Break = ();

    fn pre_visit_query(&mut self, query: &mut Query) -> ControlFlow<Self::Break> {
        if let Some(with) = &mut query.with {
            for cte in &mut with.cte_tables {
                self.case.fold_alias(&mut cte.alias);
            }
        }
        self.normalize_set_expr(&mut query.body);
        ControlFlow::Continue(())
    }

    fn pre_visit_relation(&mut self, relation: &mut ObjectName) -> ControlFlow<Self::Break> {
        self.case.fold_object_name(relation);
        ControlFlow::Continue(())
    }

    fn pre_visit_table_factor(
        &mut self,
        table_factor: &mut TableFactor,
    ) -> ControlFlow<Self::Break> {
        match table_factor {
            TableFactor::Table {
                alias: Some(alias), ..
            }
            | TableFactor::Derived {
                alias: Some(alias), ..
            } => self.case.fold_alias(alias),
            TableFactor::NestedJoin {
                table_with_joins, ..
            } => self.case.fold_joins(&mut table_with_joins.joins),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_expr(&mut self, expr: &mut Expr) -> ControlFlow<Self::Break> {
        match expr {
            Expr::Identifier(ident) => self.case.fold(ident),
            Expr::CompoundIdentifier(idents) => {
                for ident in idents {
                    self.case.fold(ident);
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
