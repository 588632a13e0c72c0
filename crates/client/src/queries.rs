//! GraphQL query documents.
//!
//! Each constant is a complete document (operation plus the fragments it
//! uses), sent verbatim as the `query` field of the request payload.

/// Shared selection set for activity feed items. Appended to the two
/// activity queries when the request payload is built.
pub const ACTIVITY_FRAGMENT: &str = r#"
    fragment Activity on ActivityFeedItem {
      accountId
      externalCanonicalId
      amount
      amountSign
      occurredAt
      opposingAccountId
      type
      subType
      eTransferEmail
      eTransferName
      p2pHandle
      p2pMessage
      assetSymbol
      assetQuantity
      aftOriginatorName
      aftTransactionCategory
      billPayCompanyName
      billPayPayeeNickname
      frequency
      spendMerchant
    }
"#;

/// Account-scoped activity list (used by the account details view).
pub const FETCH_ACTIVITY_LIST: &str = r#"
    query FetchActivityList(
      $first: Int!
      $cursor: Cursor
      $accountIds: [String!]
      $endDate: Datetime
      $startDate: Datetime
    ) {
      activities(
        first: $first
        after: $cursor
        accountIds: $accountIds
        endDate: $endDate
        startDate: $startDate
      ) {
        edges {
          node {
            ...Activity
          }
        }
        pageInfo {
          hasNextPage
          endCursor
        }
      }
    }
"#;

/// Identity-scoped activity feed (used by the activity feed page).
pub const FETCH_ACTIVITY_FEED_ITEMS: &str = r#"
    query FetchActivityFeedItems(
      $first: Int
      $cursor: Cursor
      $condition: ActivityCondition
      $orderBy: [ActivitiesOrderBy!] = OCCURRED_AT_DESC
    ) {
      activityFeedItems(
        first: $first
        after: $cursor
        condition: $condition
        orderBy: $orderBy
      ) {
        edges {
          node {
            ...Activity
          }
        }
        pageInfo {
          hasNextPage
          endCursor
        }
      }
    }
"#;

/// Account directory with derived nickname inputs.
pub const FETCH_ALL_ACCOUNT_FINANCIALS: &str = r#"
    query FetchAllAccountFinancials(
      $identityId: ID!
      $pageSize: Int = 25
      $cursor: String
    ) {
      identity(id: $identityId) {
        id
        accounts(filter: {}, first: $pageSize, after: $cursor) {
          pageInfo {
            hasNextPage
            endCursor
          }
          edges {
            node {
              ...Account
            }
          }
        }
      }
    }

    fragment Account on Account {
      id
      unifiedAccountType
      nickname
    }
"#;

/// Bank funds transfer lookup for EFT enrichment.
pub const FETCH_FUNDS_TRANSFER: &str = r#"
    query FetchFundsTransfer($id: ID!) {
      fundsTransfer: funds_transfer(id: $id, include_cancelled: true) {
        id
        status
        source {
          ...BankAccountOwner
        }
        destination {
          ...BankAccountOwner
        }
      }
    }

    fragment BankAccountOwner on BankAccountOwner {
      bankAccount: bank_account {
        id
        institutionName: institution_name
        nickname
        ...CaBankAccount
        ...UsBankAccount
      }
    }

    fragment CaBankAccount on CaBankAccount {
      accountName: account_name
      accountNumber: account_number
    }

    fragment UsBankAccount on UsBankAccount {
      accountName: account_name
      accountNumber: account_number
    }
"#;

/// Institutional transfer lookup for incoming inter-institution transfers.
pub const FETCH_INSTITUTIONAL_TRANSFER: &str = r#"
    query FetchInstitutionalTransfer($id: ID!) {
      accountTransfer(id: $id) {
        ...InstitutionalTransfer
      }
    }

    fragment InstitutionalTransfer on InstitutionalTransfer {
      institutionName: institution_name
      transferStatus: external_state
      redactedInstitutionAccountNumber: redacted_institution_account_number
    }
"#;
